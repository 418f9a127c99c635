/*!
# `def` label `(` expression `)` statements `end`

## Purpose
Bind a label to one of the three stacks.

## Remarks
Family A pushes register A on the stack numbered by the expression,
taken modulo 3. Family B pops that stack into register A. Its number
is not reduced: -3, -2 and -1 count back from the last stack, so they
name stacks 0, 1 and 2, and anything else outside 0 to 2 is
`SUBSCRIPT OUT OF RANGE`.
Popping an empty stack sets A to zero.

*/
