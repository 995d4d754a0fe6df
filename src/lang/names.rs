/// ## Name table used while compiling
///
/// Variables come first, then references declared so far. In discovery
/// mode an unknown name becomes the next variable, so the table that
/// comes out of a compile may be longer than the one that went in.

#[derive(Debug, Clone, Default)]
pub struct Names {
    variables: Vec<String>,
    references: Vec<String>,
    discover: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Variable(usize),
    Reference(usize),
}

impl Names {
    pub fn new(variables: Vec<String>, discover: bool) -> Names {
        Names {
            variables,
            references: vec![],
            discover,
        }
    }

    pub fn resolve(&mut self, name: &str) -> Option<Binding> {
        if let Some(index) = self.variables.iter().position(|v| v == name) {
            return Some(Binding::Variable(index));
        }
        if let Some(index) = self.references.iter().rposition(|r| r == name) {
            return Some(Binding::Reference(index));
        }
        if self.discover {
            self.variables.push(name.to_string());
            return Some(Binding::Variable(self.variables.len() - 1));
        }
        None
    }

    pub fn declare_reference(&mut self, name: &str) {
        self.references.push(name.to_string());
    }

    pub fn into_variables(self) -> Vec<String> {
        self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        let mut names = Names::new(vec!["a".into()], false);
        names.declare_reference("a");
        names.declare_reference("b");
        assert_eq!(names.resolve("a"), Some(Binding::Variable(0)));
        assert_eq!(names.resolve("b"), Some(Binding::Reference(1)));
        assert_eq!(names.resolve("c"), None);
    }

    #[test]
    fn test_discovery() {
        let mut names = Names::new(vec!["x".into()], true);
        assert_eq!(names.resolve("y"), Some(Binding::Variable(1)));
        assert_eq!(names.resolve("y"), Some(Binding::Variable(1)));
        assert_eq!(names.resolve("z"), Some(Binding::Variable(2)));
        assert_eq!(names.into_variables(), vec!["x", "y", "z"]);
    }
}
