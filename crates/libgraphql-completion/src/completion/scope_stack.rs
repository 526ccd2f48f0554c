/// A stack of type contexts where a context is first *staged* (when the name
/// that introduces it is seen) and only *committed* when the block it applies
/// to is entered.
///
/// For `user { name }` the field `user` stages the `User` type and the `{`
/// commits it, so `name` resolves against `User`. A locked stack ignores
/// every mutation and reports no context; this is how the selection stack
/// stays out of the way while the cursor is inside an argument list.
///
/// Every [`commit()`](Self::commit) pushes exactly one entry, even if nothing
/// was staged, so that the matching [`pop()`](Self::pop) on a closing brace
/// always removes the entry its opening brace pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct ScopeStack<T> {
    entries: Vec<Option<T>>,
    locked: bool,
    staged: Option<T>,
}

impl<T: Clone> ScopeStack<T> {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            locked: false,
            staged: None,
        }
    }

    /// Pushes the staged context (or an absent entry if nothing is staged)
    /// and clears the staged slot.
    pub fn commit(&mut self) {
        if self.locked {
            return;
        }
        self.entries.push(self.staged.take());
    }

    /// Number of committed entries, absent ones included.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn pop(&mut self) {
        if self.locked {
            return;
        }
        self.entries.pop();
    }

    pub fn stage(&mut self, context: T) {
        if self.locked {
            return;
        }
        self.staged = Some(context);
    }

    pub fn staged(&self) -> Option<&T> {
        self.staged.as_ref()
    }

    /// The innermost committed context.
    ///
    /// `None` when the stack is empty, locked, or when the innermost block was
    /// entered without anything staged.
    pub fn top(&self) -> Option<&T> {
        if self.locked {
            return None;
        }
        self.entries.last().and_then(|entry| entry.as_ref())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn unstage(&mut self) {
        if self.locked {
            return;
        }
        self.staged = None;
    }
}

impl<T: Clone> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
