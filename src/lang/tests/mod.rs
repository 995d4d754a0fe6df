use super::ast::*;
use super::*;


fn names(vars: &[&str]) -> Names {
    Names::new(vars.iter().map(|s| s.to_string()).collect(), false)
}

fn parse_str(s: &str) -> Expression {
    match parse(s, 0, &mut names(&["x", "y"])) {
        Ok(expr) => expr,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn parse_err(s: &str) -> Error {
    match parse(s, 0, &mut names(&["x", "y"])) {
        Ok(expr) => panic!("{:?}", expr),
        Err(e) => e,
    }
}
