/*!
# `(format` label `"` statements `")`

## Purpose
Run the body while register C is positive.

## Remarks
C is decremented after every iteration. The label is bound to a trigger:
family A breaks out of the loop without decrementing, family B skips the
rest of the body and decrements as usual. A trigger belonging to an outer
loop passes straight through inner ones.

## Example
<pre><code>&nbsp;(format 0.0f " usestrictqw/ ++i /; ")
</code></pre>
Leaves C alone, because the first iteration breaks.

*/
