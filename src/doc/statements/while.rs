/*!
# `WHILE` label operator expression statements `WEND`

## Purpose
Set register E for the duration of the body and bind a label to a
private accumulator.

## Remarks
The operator is one of `<`, `>`, `=`. The accumulator starts at the new
value of E. Each trigger reads E when it runs.

| operator | family A | family B |
|----------|----------|----------|
| `<` | add E | subtract E |
| `>` | divide by E | multiply by E |
| `=` | subtract 1 | add 1 |

Whatever happens in the body, E is put back afterwards.

*/
