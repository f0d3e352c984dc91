//! Contains the structural parser and its state machine.
//!
//! The parser keeps a single cursor, the *current container*, and looks at
//! nothing but that container's type and its last child to decide whether
//! the next token is allowed. Opening brackets push a new container and
//! descend into it; closing brackets climb back out through the parent link.
//! The decision for each token comes from `TRANSITIONS`, checked top to
//! bottom.

use crate::error::ParseError;
use crate::node::{Node, NodeKind, Scope, Tree};
use crate::options::ParserOptions;
use crate::token::{Token, TokenKind};
use tracing::{debug, trace};

/// What the parser can see when a token arrives.
#[derive(Clone, Copy)]
struct Cursor<'t, 'a> {
    container: NodeKind<'a>,
    last: Option<&'t Node<'a>>,
}

impl Cursor<'_, '_> {
    fn last_scope(&self) -> Option<Scope> {
        self.last.and_then(|node| node.scope)
    }

    fn last_is(&self, kind: NodeKind<'_>) -> bool {
        self.last.is_some_and(|node| node.kind == kind)
    }

    /// Whether the container has a free slot for a complete value.
    fn expects_value(&self) -> bool {
        match self.container {
            NodeKind::Object => self.last_is(NodeKind::Colon),
            NodeKind::Array => self.last.is_none() || self.last_is(NodeKind::Comma),
            _ => false,
        }
    }

    /// Like `expects_value`, but also true for an empty root: the root's
    /// only child is a container.
    fn expects_container(&self) -> bool {
        match self.container {
            NodeKind::Root => self.last.is_none(),
            _ => self.expects_value(),
        }
    }

    /// Whether the container of the given kind may be closed here.
    fn can_close(&self, kind: NodeKind<'_>) -> bool {
        self.container == kind
            && (self.last.is_none() || self.last_scope() == Some(Scope::Value))
    }
}

/// The effect of an accepted token on the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action<'a> {
    /// Append a container and make it the current one.
    Open(NodeKind<'a>),
    /// Make the current container's parent the current one.
    Close,
    /// Append a leaf node to the current container.
    Push(NodeKind<'a>, Option<Scope>),
}

/// One row of the transition table.
struct Transition {
    /// Which tokens this row handles.
    accepts: fn(&TokenKind<'_>) -> bool,
    /// The action for an accepted token, or `None` if it is out of place.
    decide: for<'t, 'a> fn(TokenKind<'a>, Cursor<'t, 'a>) -> Option<Action<'a>>,
}

static TRANSITIONS: [Transition; 8] = [
    Transition {
        accepts: |kind| matches!(kind, TokenKind::LeftBrace),
        decide: open_object,
    },
    Transition {
        accepts: |kind| matches!(kind, TokenKind::LeftBracket),
        decide: open_array,
    },
    Transition {
        accepts: |kind| matches!(kind, TokenKind::RightBrace),
        decide: close_object,
    },
    Transition {
        accepts: |kind| matches!(kind, TokenKind::RightBracket),
        decide: close_array,
    },
    Transition {
        accepts: |kind| matches!(kind, TokenKind::String(_)),
        decide: string,
    },
    Transition {
        accepts: |kind| {
            matches!(
                kind,
                TokenKind::Number(_) | TokenKind::Boolean(_) | TokenKind::Null
            )
        },
        decide: scalar,
    },
    Transition {
        accepts: |kind| matches!(kind, TokenKind::Comma),
        decide: comma,
    },
    Transition {
        accepts: |kind| matches!(kind, TokenKind::Colon),
        decide: colon,
    },
];

fn open_object<'a>(_: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    cursor.expects_container().then_some(Action::Open(NodeKind::Object))
}

fn open_array<'a>(_: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    cursor.expects_container().then_some(Action::Open(NodeKind::Array))
}

fn close_object<'a>(_: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    cursor.can_close(NodeKind::Object).then_some(Action::Close)
}

fn close_array<'a>(_: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    cursor.can_close(NodeKind::Array).then_some(Action::Close)
}

fn string<'a>(token: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    let TokenKind::String(text) = token else {
        return None;
    };
    let kind = NodeKind::String(text);
    // Inside an object a string is a key unless a colon is waiting for a value.
    let key_slot = cursor.last.is_none() || cursor.last_is(NodeKind::Comma);
    if cursor.container == NodeKind::Object && key_slot {
        Some(Action::Push(kind, Some(Scope::Key)))
    } else if cursor.expects_value() {
        Some(Action::Push(kind, Some(Scope::Value)))
    } else {
        None
    }
}

fn scalar<'a>(token: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    let kind = match token {
        TokenKind::Number(n) => NodeKind::Number(n),
        TokenKind::Boolean(b) => NodeKind::Boolean(b),
        TokenKind::Null => NodeKind::Null,
        _ => return None,
    };
    cursor
        .expects_value()
        .then_some(Action::Push(kind, Some(Scope::Value)))
}

fn comma<'a>(_: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    let in_container = matches!(cursor.container, NodeKind::Object | NodeKind::Array);
    (in_container && cursor.last_scope() == Some(Scope::Value))
        .then_some(Action::Push(NodeKind::Comma, None))
}

fn colon<'a>(_: TokenKind<'a>, cursor: Cursor<'_, 'a>) -> Option<Action<'a>> {
    (cursor.last_scope() == Some(Scope::Key)).then_some(Action::Push(NodeKind::Colon, None))
}

/// Builds the structural tree for `tokens` with the default options.
pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<Tree<'a>, ParseError> {
    parse_with(tokens, &ParserOptions::default())
}

/// Builds the structural tree for `tokens`.
///
/// Each token is examined once, in order. The returned tree's root holds
/// exactly one container; `Tree::value` returns it.
///
/// # Errors
/// `ParseError::Syntax` naming the first out-of-place token, or
/// `"end of input"` when containers are left open or there is no value.
/// `ParseError::DepthExceeded` when more than `options.max_depth`
/// containers are open at once.
pub fn parse_with<'a>(
    tokens: &[Token<'a>],
    options: &ParserOptions,
) -> Result<Tree<'a>, ParseError> {
    let mut tree = Tree::new();
    let mut current = Tree::ROOT;
    let mut depth = 0;

    for token in tokens {
        let cursor = Cursor {
            container: tree.node(current).kind,
            last: tree.last_child(current),
        };
        let action = TRANSITIONS
            .iter()
            .find(|transition| (transition.accepts)(&token.kind))
            .and_then(|transition| (transition.decide)(token.kind, cursor))
            .ok_or_else(|| ParseError::syntax(token.text))?;
        trace!(token = token.text, ?action, "transition");

        match action {
            Action::Open(kind) => {
                if depth >= options.max_depth {
                    return Err(ParseError::DepthExceeded {
                        max: options.max_depth,
                    });
                }
                depth += 1;
                current = tree.push(current, kind, Some(Scope::Value));
            }
            Action::Close => {
                depth -= 1;
                current = tree
                    .node(current)
                    .parent
                    .ok_or_else(|| ParseError::syntax(token.text))?;
            }
            Action::Push(kind, scope) => {
                tree.push(current, kind, scope);
            }
        }
    }

    if current != Tree::ROOT || tree.value().is_none() {
        return Err(ParseError::end_of_input());
    }
    debug!(nodes = tree.node_count(), "built syntax tree");
    Ok(tree)
}
