/*!
# Built-in Functions

| Function | Result |
|----------|--------|
| `sin(x)` `cos(x)` `tan(x)` | Trigonometry in radians |
| `asin(x)` `acos(x)` `atan(x)` | Inverse trigonometry |
| `sinh(x)` `cosh(x)` `tanh(x)` | Hyperbolic functions |
| `asinh(x)` `acosh(x)` `atanh(x)` | Inverse hyperbolic functions |
| `ln(x)` | Natural logarithm |
| `log(x)` | Base 10 logarithm |
| `abs(x)` | Absolute value |
| `int(x)` | Nearest integer, `floor(x + 0.5)` |
| `frac(x)` | Fractional part, with the sign of x |
| `ceil(x)` `floor(x)` | Rounded up or down |
| `round(x)` | `floor(x + 0.5)` |
| `exp(x)` | e to the power of x |
| `sqr(x)` | `x * x` |
| `sqrt(x)` | Square root |
| `sign(x)` | -1, 0 or 1 |
| `step(x)` | 0 when x is negative, 1 otherwise |
| `random(x)` | Uniform in `[0, x)` |
| `min(a, b)` `max(a, b)` | Smaller or larger argument |
| `mod(a, b)` | IEEE remainder, `mod(8, 3)` is -1 |
| `atan2(y, x)` | Angle of the point `(x, y)` |

The constants `pi` and `e` are also available.

# Errors

| Code | Description |
|------|-------------|
| 1  | Syntax error |
| 2  | Parenthesis expected |
| 3  | Uncompiled function |
| 4  | Expression expected |
| 5  | Unknown identifier |
| 6  | Operator expected |
| 7  | Parentheses do not match |
| 8  | Code damaged |
| 9  | Stack overflow, or nesting deeper than 200 levels |
| 10 | Too many constants |
| 11 | Comma expected |
| 12 | Invalid operand |
| 13 | Invalid operator |
| 14 | No reference separator |
| 15 | Reference name expected |
| 16 | Wrong number of values |

*/
