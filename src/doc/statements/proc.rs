/*!
# `proc` label `{` expression `}{` statements `}`

## Purpose
Bind a label to a printer while the body runs.

## Remarks
The expression is evaluated each time the trigger runs. Family A writes
the character with that code point, family B writes the number in
decimal. Nothing else is written, not even a newline, so a program
that wants line breaks prints code point 10 itself.

## Example
<pre><code>&nbsp;proc 0.0f {--help}{ usestrictqw/ ++i /; }
</code></pre>
Writes a single NUL character.

*/
