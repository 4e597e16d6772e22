//! Variable scoping.
//!
//! The environment is an owned stack: one [`Frame`] per active function
//! call (the global frame at the bottom), each holding a stack of block
//! scopes. Lookup walks the current frame's scopes innermost first, then
//! falls back to the global scope. A function body therefore sees its own
//! blocks and the globals, never its caller's locals.

use fig_value::Symbol;
use rustc_hash::FxHashMap;

/// Bindings introduced by one block.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<String, Symbol>,
}

/// Scopes of one function activation, plus how many loops it is inside.
struct Frame {
    scopes: Vec<Scope>,
    loop_depth: usize,
}

impl Frame {
    fn new() -> Self {
        Frame {
            scopes: vec![Scope::default()],
            loop_depth: 0,
        }
    }
}

pub struct Environment {
    /// Never empty: `frames[0]` is the global frame.
    frames: Vec<Frame>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::new()],
        }
    }

    fn frame(&self) -> &Frame {
        let last = self.frames.len() - 1;
        &self.frames[last]
    }

    fn frame_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn scope_mut(&mut self) -> &mut Scope {
        let frame = self.frame_mut();
        let last = frame.scopes.len() - 1;
        &mut frame.scopes[last]
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.frame_mut().scopes.push(Scope::default());
    }

    /// Pop the innermost block scope. The base scope of a frame stays.
    #[inline]
    pub fn pop_scope(&mut self) {
        let frame = self.frame_mut();
        if frame.scopes.len() > 1 {
            frame.scopes.pop();
        }
    }

    /// Start a function activation whose only outer scope is the global one.
    pub fn push_frame(&mut self) {
        self.frames.push(Frame::new());
        tracing::trace!(depth = self.frames.len(), "push frame");
    }

    /// End the current function activation. The global frame stays.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
            tracing::trace!(depth = self.frames.len(), "pop frame");
        }
    }

    /// Whether a user function is executing.
    pub fn in_function(&self) -> bool {
        self.frames.len() > 1
    }

    pub fn enter_loop(&mut self) {
        self.frame_mut().loop_depth += 1;
    }

    pub fn exit_loop(&mut self) {
        let frame = self.frame_mut();
        frame.loop_depth = frame.loop_depth.saturating_sub(1);
    }

    /// Whether a loop of the current function (or of the top level) is running.
    pub fn in_loop(&self) -> bool {
        self.frame().loop_depth > 0
    }

    /// Bind `name` in the innermost scope, replacing any binding there.
    pub fn define(&mut self, name: &str, symbol: Symbol) {
        self.scope_mut().bindings.insert(name.to_owned(), symbol);
    }

    /// Drop `name` from the innermost scope.
    pub fn remove(&mut self, name: &str) {
        self.scope_mut().bindings.remove(name);
    }

    /// Whether `name` is bound in the innermost scope itself.
    pub fn is_declared_here(&self, name: &str) -> bool {
        self.frame()
            .scopes
            .last()
            .is_some_and(|scope| scope.bindings.contains_key(name))
    }

    /// The symbol `name` resolves to from the innermost scope.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        let local = self
            .frame()
            .scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name));
        if let Some(symbol) = local {
            return Some(symbol.clone());
        }
        if !self.in_function() {
            return None;
        }
        self.lookup_global(name)
    }

    /// The symbol bound to `name` in the global scope.
    pub fn lookup_global(&self, name: &str) -> Option<Symbol> {
        self.frames[0].scopes[0].bindings.get(name).cloned()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
