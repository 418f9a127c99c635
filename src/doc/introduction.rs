/*!
# Introduction to potatoes

A potatoes program is a single statement. Every keyword is borrowed from
some other language and used as a fixed literal: `synchronized(` from
Java, `std::cout<<` from C++, `(format` from Lisp, `case` from Haskell.
There are no identifiers and no numeric literals. Numbers come from
registers, from how many times a literal has been seen, and from the line
a label was bound on.

Run a program by passing its file to the interpreter.

<pre><code>&nbsp;$ potatoes countdown.potato
&nbsp;321
</code></pre>

Add `--check` to parse without running. Set `RUST_LOG=trace` to watch
every statement execute. Stop a running loop with CTRL-C.

Here is the whole of `countdown.potato`. The two blank lines matter.

<pre><code>&nbsp;
&nbsp;
&nbsp;synchronized( 0.0f ){
&nbsp;synchronized( std::ignore ){
&nbsp;std::cout<< (int) ++i <<std::endl;
&nbsp;goto nullptr ;
&nbsp;(format $ARGV "
&nbsp;proc __dict__ {$[}{ s/ void(0) //g }
&nbsp;")
&nbsp;}
&nbsp;}
</code></pre>

The first `synchronized(` is on line 3, so its label holds 3. The second
holds 4. Register A is loaded with 3, and `goto` with an even label moves
A into C. The loop then prints C in decimal and counts it down to zero.

Notice that the same label is spelled `0.0f` and then `++i`, and the
other one `std::ignore`, `nullptr`, `__dict__`, `void(0)`. Each label
cycles through four spellings, one per appearance in the source. The
[spelling chapter](../__Chapter_1/index.html) explains the rule. It is
the thing that makes the language hard to write.

Whitespace may appear anywhere, even inside a keyword: `s t d : : c o u t
< <` is a load statement. Anything after the first complete statement is
ignored.

*/
