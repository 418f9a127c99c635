/*!
# `goto` label `;`

## Purpose
Rotate the registers.

## Remarks
The label must hold a number. When it is even, A, C, E become E, A, C.
When it is odd, A, C, E become C, E, A.

*/
