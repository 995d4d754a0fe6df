/*!
# Introductory Tutorial for the Formula Calculator

Run the `formula` executable from a terminal. Type CTRL-D or `:quit`
to leave.

<pre><code>&nbsp;  Formula calculator. Type :quit to leave.
&nbsp;> █
</code></pre>

Type an expression and press ENTER to see its value.

<pre><code>&nbsp;> 2+3*4
&nbsp;  14
&nbsp;> 2^3^2
&nbsp;  512
</code></pre>

Variables are bound with `:=`. Every name used in an expression must
be bound first.

<pre><code>&nbsp;> x := 3
&nbsp;  x = 3
&nbsp;> if(x<5, x*2, 0)
&nbsp;  6
&nbsp;> x*y
&nbsp;  UNBOUND: y
</code></pre>

A formula may name sub-expressions before the main expression. Each
one is computed once per evaluation, in order.

<pre><code>&nbsp;> r:sqrt(x); r*r+1
&nbsp;  4
</code></pre>

`:table` evaluates an expression over a range of one variable.
Stop a long table with CTRL-C.

<pre><code>&nbsp;> :table t 0 1 4 t^2
&nbsp;             0 0
&nbsp;          0.25 0.0625
&nbsp;           0.5 0.25
&nbsp;          0.75 0.5625
&nbsp;             1 1
</code></pre>

`:code` shows what an expression compiles to, `:vars` lists the bound
variables and `:seed n` makes `random` repeat.

<pre><code>&nbsp;> :code 3*x+1
&nbsp;  0000 NUMERIC 3
&nbsp;  0001 VAR(0)
&nbsp;  0002 MUL
&nbsp;  0003 NUMERIC 1
&nbsp;  0004 ADD
</code></pre>

*/
