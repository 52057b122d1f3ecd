#![no_std]
#![forbid(unsafe_code)]

//! Rule matching for graph programs.
//!
//! Applying a rule of a graph program means finding
//! a *morphism* from the rule's left-hand graph into the host graph:
//! every rule node and edge is mapped to a host node and edge, and
//! every variable occurring in the rule labels is bound to a host value,
//! such that the rule labels, instantiated with the variable values,
//! equal the labels of the host items.
//!
//! This library provides the data structures that a matching algorithm
//! manipulates while it searches for such a morphism:
//!
//! * A [`Morphism`] records node and edge mappings together with
//!   the [`Assignments`] of variables to values.
//! * Because the search backtracks, every mapping remembers
//!   how many variables were bound in the course of establishing it,
//!   and removing the mapping unbinds exactly these variables.
//! * The [`affix`] module determines where literal strings occur in host strings,
//!   to find the values of string variables.
//!
//! The enumeration of candidates is up to the caller,
//! as is checking that no host item is used twice.
//!
//! The following example performs one matching step:
//! It maps rule node 0, labelled `"ab" . x`, to host nodes 0 and 1,
//! labelled `"abcd"` and `"abxy"`, respectively.
//!
//! ~~~
//! use gpmatch::{affix, Morphism, Outcome};
//!
//! let host = ["abcd", "abxy"];
//! let mut m = Morphism::new(1, 0, 1);
//!
//! // try host node 0
//! let before = m.assigned();
//! let rest = affix::match_prefix("ab", host[0]).unwrap();
//! assert_eq!(rest, 2);
//! assert_eq!(m.try_assign_string(0, &host[0][rest..]), Outcome::Bound);
//! m.add_node_map(0, 0, m.assigned() - before);
//! assert_eq!(m.string(0)?, "cd");
//!
//! // backtrack and try host node 1
//! m.remove_node_map(0)?;
//! assert_eq!(m.assigned(), 0);
//! let rest = affix::match_prefix("ab", host[1]).unwrap();
//! assert_eq!(m.try_assign_string(0, &host[1][rest..]), Outcome::Bound);
//! m.add_node_map(0, 1, 1);
//! assert!(m.is_total());
//!
//! // a match has been found; prepare for the next one
//! m.reset();
//! assert_eq!(m.lookup_node(0), None);
//! # Ok::<_, gpmatch::Error>(())
//! ~~~

extern crate alloc;
#[macro_use]
extern crate log;

pub mod affix;
pub mod assignment;
pub mod error;
pub mod label;
pub mod morphism;
mod stack;

pub use assignment::{Assignments, Kind, Outcome, Value};
pub use error::Error;
pub use label::{HostAtom, HostList};
pub use morphism::{Map, Morphism, Shape, State};
pub use stack::Stack;
