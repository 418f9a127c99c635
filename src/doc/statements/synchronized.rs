/*!
# `synchronized(` label `){` statements `}`

## Purpose
Bind a label to the current line number while the body runs.

## Remarks
The number is the line on which the keyword ends. Only `\n` starts a
new line; a `\r` on its own does not. When the body finishes
the label gets back whatever it held before, even if the body failed.

## Example
<pre><code>&nbsp;synchronized( 0.0f ){ std::cout<< (int) ++i <<std::endl; }
</code></pre>
Loads 1 into register A.

*/
