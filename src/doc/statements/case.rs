/*!
# `case` label `of{_->` statements `}`

## Purpose
Bind a label to a reader of standard input.

## Remarks
Family A reads a line and stores it in register A as an integer. Family B
reads one character and stores its code point. Reading past the end of
input is an `INPUT PAST END` error.

*/
