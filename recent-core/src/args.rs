//! Invocation argument validation

use crate::error::{RecentError, Result};

/// First-argument token selecting the add action.
pub const ADD_TOKEN: &str = "+";
/// First-argument token selecting the remove action.
pub const REMOVE_TOKEN: &str = "-";
/// Recent list used when no list name is given.
pub const DEFAULT_LIST: &str = "DEFAULT";

/// What to do with the client's address entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add or refresh the address in the list.
    Add,
    /// Remove the address from the list.
    Remove,
}

impl Action {
    /// Sign prepended to the address in a control directive.
    pub fn sign(&self) -> &'static str {
        match self {
            Action::Add => ADD_TOKEN,
            Action::Remove => REMOVE_TOKEN,
        }
    }
}

/// Validated invocation arguments: the action and the list it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleArgs {
    pub action: Action,
    pub list: String,
}

/// Validate the raw invocation argument list.
///
/// Exactly one or two arguments are accepted: the action token (`+` or `-`)
/// and an optional recent list name. Without a second argument the list
/// defaults to `DEFAULT`. An empty list name is rejected: it would name no
/// list and turn the control path into its parent directory.
pub fn parse_args(args: &[String]) -> Result<ModuleArgs> {
    if args.is_empty() || args.len() > 2 {
        return Err(RecentError::ArgumentCount { count: args.len() });
    }

    let action = match args[0].as_str() {
        ADD_TOKEN => Action::Add,
        REMOVE_TOKEN => Action::Remove,
        other => {
            return Err(RecentError::ArgumentValue {
                value: other.to_string(),
            })
        }
    };

    let list = match args.get(1) {
        Some(name) if name.is_empty() => {
            return Err(RecentError::ArgumentValue {
                value: String::new(),
            })
        }
        Some(name) => name.clone(),
        None => DEFAULT_LIST.to_string(),
    };

    Ok(ModuleArgs { action, list })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_with_default_list() {
        let parsed = parse_args(&strings(&["+"])).unwrap();
        assert_eq!(parsed.action, Action::Add);
        assert_eq!(parsed.list, "DEFAULT");
    }

    #[test]
    fn test_remove_with_explicit_list() {
        let parsed = parse_args(&strings(&["-", "MYLIMIT"])).unwrap();
        assert_eq!(parsed.action, Action::Remove);
        assert_eq!(parsed.list, "MYLIMIT");
    }

    #[test]
    fn test_no_arguments() {
        let err = parse_args(&[]).unwrap_err();
        assert!(matches!(err, RecentError::ArgumentCount { count: 0 }));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = parse_args(&strings(&["+", "MYLIMIT", "extra"])).unwrap_err();
        assert!(matches!(err, RecentError::ArgumentCount { count: 3 }));
    }

    #[test]
    fn test_unknown_action_token() {
        let err = parse_args(&strings(&["add"])).unwrap_err();
        match err {
            RecentError::ArgumentValue { value } => assert_eq!(value, "add"),
            other => panic!("expected ArgumentValue, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_name_rejected() {
        let err = parse_args(&strings(&["+", ""])).unwrap_err();
        assert!(matches!(err, RecentError::ArgumentValue { .. }));
    }

    #[test]
    fn test_action_signs() {
        assert_eq!(Action::Add.sign(), "+");
        assert_eq!(Action::Remove.sign(), "-");
    }
}
