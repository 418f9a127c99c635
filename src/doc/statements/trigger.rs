/*!
# Trigger invocation

## Purpose
Run the trigger bound to a label through family A or family B.

## Remarks
The delimiters rotate, see [spellings](../../__Chapter_1/index.html).
A label that does not hold a trigger is a `SEMANTIC ERROR`.

*/
