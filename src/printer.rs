//! Compact textual rendering of predicate trees, used by `Display`.
//!
//! | node                | rendering            |
//! |---------------------|----------------------|
//! | token               | `KEYWORD("BEGIN")`   |
//! | token, any text     | `IDENTIFIER`         |
//! | any token           | `_`                  |
//! | sequence            | `(a b c)`            |
//! | alternative         | `(a \| b)`           |
//! | optional            | `[a]`                |
//! | repetition          | `a{2,3}` `a{1,}` `a{2}` |
//! | negation            | `!a`                 |

use crate::{Node, Predicate, Repeat, TokenSpec, visitor::Visitor};
use std::fmt::{self, Write};

struct Printer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl Printer<'_, '_> {
    fn list(&mut self, items: &[Predicate], separator: &str) -> fmt::Result {
        self.f.write_char('(')?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.f.write_str(separator)?;
            }
            item.accept(self, ())?;
        }
        self.f.write_char(')')
    }

    fn grouped(&mut self, item: &Predicate, group: bool) -> fmt::Result {
        if group {
            self.f.write_char('(')?;
            item.accept(self, ())?;
            self.f.write_char(')')
        } else {
            item.accept(self, ())
        }
    }
}

impl Visitor<()> for Printer<'_, '_> {
    type Output = fmt::Result;

    fn visit_token(&mut self, spec: &TokenSpec, (): ()) -> fmt::Result {
        write_spec(self.f, spec)
    }

    fn visit_any(&mut self, (): ()) -> fmt::Result {
        self.f.write_char('_')
    }

    fn visit_sequence(&mut self, items: &[Predicate], (): ()) -> fmt::Result {
        self.list(items, " ")
    }

    fn visit_alternative(&mut self, choices: &[Predicate], (): ()) -> fmt::Result {
        self.list(choices, " | ")
    }

    fn visit_optional(&mut self, item: &Predicate, (): ()) -> fmt::Result {
        self.f.write_char('[')?;
        item.accept(self, ())?;
        self.f.write_char(']')
    }

    fn visit_repeat(&mut self, item: &Predicate, bounds: Repeat, (): ()) -> fmt::Result {
        self.grouped(item, matches!(item.node(), Node::Not(_)))?;
        match bounds {
            Repeat { min, max: None } => write!(self.f, "{{{min},}}"),
            Repeat { min, max: Some(max) } if min == max => write!(self.f, "{{{min}}}"),
            Repeat { min, max: Some(max) } => write!(self.f, "{{{min},{max}}}"),
        }
    }

    fn visit_not(&mut self, item: &Predicate, (): ()) -> fmt::Result {
        self.f.write_char('!')?;
        self.grouped(item, matches!(item.node(), Node::Repeat { .. }))
    }
}

pub(crate) fn write_spec(f: &mut fmt::Formatter<'_>, spec: &TokenSpec) -> fmt::Result {
    f.write_str(spec.category())?;
    match spec.value() {
        Some(value) => write!(f, "({value:?})"),
        None => Ok(()),
    }
}

pub(crate) fn write_not(f: &mut fmt::Formatter<'_>, item: &Predicate) -> fmt::Result {
    Printer { f }.visit_not(item, ())
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut Printer { f }, ())
    }
}
