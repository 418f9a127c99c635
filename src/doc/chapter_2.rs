/*!
# Expressions

An expression is one of five forms, tried in this order.

| form | value |
|------|-------|
| a register key | the register it names this time |
| `--help` | zero |
| `"Hello,world!"` or `arr[:]` | how many times that literal appeared before |
| `(int)` label | the number bound to the label |
| `@{[` expression `]}` | the negated expression |

`(int)` on a label that holds a trigger, or nothing, is a `SEMANTIC ERROR`.
Negating the smallest number is an `OVERFLOW`.

Numbers are 64 bit signed integers.

<pre><code>&nbsp;std::cout<< @{[ arr[:] ]} <<std::endl;
&nbsp;std::cout<< arr[:] <<std::endl;
</code></pre>

The first line loads zero, the second loads one.

*/
