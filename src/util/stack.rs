/// A last-in-first-out container backed by a `Vec`.
///
/// Reading or removing from an empty stack yields `None`; callers decide
/// which error that is in their context.
///
/// # Example
/// ```
/// use infixa::util::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 1);
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.is_empty());
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes a value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top value without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Pops the top value only if `predicate` holds for it.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.top().is_some_and(predicate) { self.items.pop() } else { None }
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pops every value, top first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..).rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
