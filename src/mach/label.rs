use super::Val;
use crate::lang::ast::Label;
use std::collections::HashMap;

/// ## Label memory
///
/// Bindings are dynamically scoped. `swap` installs a value and hands
/// back whatever was there so the caller can put it back on the way out.
/// The anonymous label never holds anything.

#[derive(Debug, Default)]
pub struct LabelEnv<'p> {
    labels: HashMap<Label, Val<'p>>,
}

impl<'p> LabelEnv<'p> {
    pub fn new() -> LabelEnv<'p> {
        LabelEnv::default()
    }

    pub fn fetch(&self, label: Label) -> Option<&Val<'p>> {
        self.labels.get(&label)
    }

    pub fn swap(&mut self, label: Label, value: Option<Val<'p>>) -> Option<Val<'p>> {
        if label == Label::Anonymous {
            return None;
        }
        match value {
            Some(value) => self.labels.insert(label, value),
            None => self.labels.remove(&label),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_write_ignored() {
        let mut env = LabelEnv::new();
        assert!(env.swap(Label::Anonymous, Some(Val::Number(3))).is_none());
        assert!(env.fetch(Label::Anonymous).is_none());
        assert!(env.is_empty());
    }

    #[test]
    fn test_nested_swaps_restore_in_order() {
        let mut env = LabelEnv::new();
        let l = Label::Named(1);
        let outer = env.swap(l, Some(Val::Number(1)));
        let inner = env.swap(l, Some(Val::Number(2)));
        assert_eq!(env.fetch(l).and_then(Val::number), Some(2));
        env.swap(l, inner);
        assert_eq!(env.fetch(l).and_then(Val::number), Some(1));
        env.swap(l, outer);
        assert!(env.fetch(l).is_none());
        assert_eq!(env.len(), 0);
    }
}
