/*!
# Formula Grammar

```text
formula    = { name ":" expression ";" } expression
expression = relation { ( "&" | "|" ) relation }
relation   = additive [ ( "=" | "<>" | "<" | "<=" | ">" | ">=" ) additive ]
additive   = term { ( "+" | "-" ) term }
term       = unary { ( "*" | "/" ) unary }
unary      = { "+" | "-" } power
power      = atom [ "^" unary ]
atom       = number | name | name "(" expression { "," expression } ")"
           | "(" expression ")"
```

## Precedence

From lowest to highest: `&` and `|`, one comparison, `+` and `-`,
`*` and `/`, signs, `^`. Power is right associative so `2^3^2` is 512.
A sign applies to the whole power so `-2^2` is -4.

## Numbers

Decimal with optional fraction and exponent: `7`, `.5`, `0.25`, `1e-3`,
`2.5E+4`.

## Names

A name starts with a letter or `_` and continues with letters, digits or
`_`. Case matters. A name is looked up in this order: `pi`, `e`, `if`,
the built-in functions, the variables, then the named sub-expressions
declared before it.

## Types

Comparisons and `&`/`|` produce booleans. Arithmetic, signs and function
arguments need numbers. `&` and `|` need booleans. Mixing them is an
"invalid operand" error. The first argument of `if` may be either; the
other two must be the same type. A formula whose result is boolean
evaluates to 1 or 0.

## Evaluation

Division by exactly zero divides by `f64::EPSILON` instead. A NaN anywhere
in an evaluation makes the result 0 and raises the NaN flag.

## Named sub-expressions

`a:x*2; b:a+1; a*b` declares `a` and `b` before the main expression.
Each is evaluated once per evaluation, in declaration order, and may use
the ones before it. A later declaration with the same name hides the
earlier one from the segments that follow.

*/
