/*!
# Spellings

Several constructs accept more than one spelling, and which spelling is
accepted depends on how many times the construct has appeared before it
in the source. The first appearance must use the first spelling, the
second appearance the second, and so on, wrapping around. Using a
spelling that is valid somewhere else is a `SYNTAX ERROR`.

## Labels

There are three labels. A label is identified by its table, not by how
it is spelled.

| label | 1st | 2nd | 3rd | 4th |
|-------|-----|-----|-----|-----|
| first | `0.0f` | `++i` | `<>` | `Object` |
| second | `std::ignore` | `nullptr` | `__dict__` | `void(0)` |
| third | `$ARGV` | `*read-eval*` | `FS` | `()` |

The letter `t` is the anonymous label. Binding it does nothing and it
never holds a value.

## Triggers

Triggers are invoked through family A or family B, each wrapping the
label in a pair of delimiters. Each family cycles independently.

| # | family A | family B |
|---|----------|----------|
| 1 | `usestrictqw/` label `/;` | `s/` label `//g` |
| 2 | `SETLOCAL` label | `OUTPUT=` label |
| 3 | `import` label `;` | `guard` label |
| 4 | `CFLAGS=` label | `lambda:` label |
| 5 | `\emph{` label `}` | `"""` label `"""` |
| 6 | `` `cat `` label `` ` `` | |

## Registers

Three keys read a register. Each key walks its own rotation.

| key | 1st | 2nd | 3rd |
|-----|-----|-----|-----|
| `STDERR` | A | C | E |
| `$[` | C | E | A |
| `` `uniq-c` `` | E | A | C |

*/
