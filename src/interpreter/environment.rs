/*
 * ============================================================================
 *  BISAYA++ - Sugod na!
 * ============================================================================
 *
 *  Runtime Variable Storage
 *
 *  Scopes live in an arena and refer to their parent by index. A block
 *  pushes a child scope on entry and pops it on exit, so the arena doubles
 *  as the scope stack.
 *
 *  --------------------------------------------------------------------------
 *  License
 *  --------------------------------------------------------------------------
 *  This file is part of the Bisaya++ programming language project.
 *
 *  Bisaya++ is dual-licensed under the terms of:
 *    • The MIT License
 *    • The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under these licenses is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use std::collections::HashMap;

use tracing::trace;

use crate::error::BisayaError;
use crate::lexer::token::Token;
use crate::value::{DeclaredType, Value};

/// Handle to one scope in the `Environment` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub value: Value,
    pub declared_type: DeclaredType,
}

#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, Binding>,
    parent: Option<ScopeId>,
}

#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }

    /// The top-level scope. It lives as long as the environment.
    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Number of live scopes, global included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a child scope of `parent`.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            parent: Some(parent),
        });
        trace!(scope = id.0, parent = parent.0, "scope opened");
        id
    }

    /// Drops `scope` along with anything opened after it.
    ///
    /// Scopes close in the reverse order they opened, so `scope` is always
    /// the innermost one by the time this is called. The global scope is
    /// never dropped.
    pub fn pop_scope(&mut self, scope: ScopeId) {
        if scope.0 == 0 {
            return;
        }
        self.scopes.truncate(scope.0);
        trace!(scope = scope.0, "scope closed");
    }

    /// Binds `name` in `scope` itself, replacing any earlier binding there.
    pub fn define(&mut self, scope: ScopeId, name: &str, value: Value, declared_type: DeclaredType) {
        if let Some(target) = self.scopes.get_mut(scope.0) {
            target.bindings.insert(
                name.to_string(),
                Binding {
                    value,
                    declared_type,
                },
            );
        }
    }

    /// Reads the nearest binding of `name`, searching outward from `scope`.
    pub fn get(&self, scope: ScopeId, name: &Token) -> Result<Value, BisayaError> {
        self.lookup(scope, &name.lexeme)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| undefined_variable(name))
    }

    /// Overwrites the nearest existing binding of `name`. The declared type
    /// recorded at definition is kept.
    pub fn assign(&mut self, scope: ScopeId, name: &Token, value: Value) -> Result<(), BisayaError> {
        let owner = self
            .resolve(scope, &name.lexeme)
            .ok_or_else(|| undefined_variable(name))?;

        if let Some(binding) = self.scopes[owner.0].bindings.get_mut(&name.lexeme) {
            binding.value = value;
        }

        Ok(())
    }

    /// The nearest binding of `name`, value and declared type together.
    pub fn binding(&self, scope: ScopeId, name: &Token) -> Result<&Binding, BisayaError> {
        self.lookup(scope, &name.lexeme)
            .ok_or_else(|| undefined_variable(name))
    }

    /// The type `name` was declared with, searched like `get`.
    pub fn get_type(&self, scope: ScopeId, name: &Token) -> Result<DeclaredType, BisayaError> {
        self.lookup(scope, &name.lexeme)
            .map(|binding| binding.declared_type)
            .ok_or_else(|| {
                BisayaError::reference_error(
                    format!("Undefined variable type '{}'.", name.lexeme),
                    name.span,
                )
            })
    }

    fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        let owner = self.resolve(scope, name)?;
        self.scopes[owner.0].bindings.get(name)
    }

    /// Finds the scope that owns `name`, walking the parent chain.
    fn resolve(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let frame = self.scopes.get(id.0)?;
            if frame.bindings.contains_key(name) {
                return Some(id);
            }
            current = frame.parent;
        }

        None
    }
}

fn undefined_variable(name: &Token) -> BisayaError {
    BisayaError::reference_error(format!("Undefined variable '{}'.", name.lexeme), name.span)
        .with_help("declare it first with MUGNA")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;
    use crate::span::Span;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, None, Span::line(1))
    }

    #[test]
    fn child_scope_reads_parent_bindings() {
        let mut env = Environment::new();
        let global = env.global();
        env.define(global, "x", Value::Number(1.0), DeclaredType::Numero);

        let child = env.push_scope(global);

        assert_eq!(env.get(child, &ident("x")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn define_shadows_only_in_current_scope() {
        let mut env = Environment::new();
        let global = env.global();
        env.define(global, "x", Value::Number(1.0), DeclaredType::Numero);

        let child = env.push_scope(global);
        env.define(child, "x", Value::Char('a'), DeclaredType::Letra);

        assert_eq!(env.get(child, &ident("x")), Ok(Value::Char('a')));
        assert_eq!(env.get(global, &ident("x")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_writes_to_owning_scope_and_keeps_type() {
        let mut env = Environment::new();
        let global = env.global();
        env.define(global, "flag", Value::Bool(false), DeclaredType::Tinuod);

        let child = env.push_scope(global);
        env.assign(child, &ident("flag"), Value::Bool(true)).unwrap();
        env.pop_scope(child);

        assert_eq!(env.get(global, &ident("flag")), Ok(Value::Bool(true)));
        assert_eq!(env.get_type(global, &ident("flag")), Ok(DeclaredType::Tinuod));
    }

    #[test]
    fn assign_never_creates_a_binding() {
        let mut env = Environment::new();
        let global = env.global();

        let error = env.assign(global, &ident("ghost"), Value::Null).unwrap_err();

        assert_eq!(error.code, "E_REFERENCE");
        assert_eq!(error.message, "Undefined variable 'ghost'.");
        assert!(env.get(global, &ident("ghost")).is_err());
    }

    #[test]
    fn popped_scope_bindings_are_gone() {
        let mut env = Environment::new();
        let global = env.global();

        let child = env.push_scope(global);
        env.define(child, "inner", Value::Number(3.0), DeclaredType::Numero);
        env.pop_scope(child);

        assert_eq!(env.depth(), 1);
        assert!(env.get(global, &ident("inner")).is_err());
        assert_eq!(
            env.get_type(global, &ident("inner")).unwrap_err().message,
            "Undefined variable type 'inner'."
        );
    }

    #[test]
    fn global_scope_cannot_be_popped() {
        let mut env = Environment::new();
        let global = env.global();
        env.pop_scope(global);

        assert_eq!(env.depth(), 1);
    }
}
