//! A small backtracking matcher over in-memory graphs.
//!
//! Rule nodes are matched in index order, then rule edges.
//! Host items may be used at most once.

use fnv::FnvHashSet;
use gpmatch::{affix, Error, HostAtom, HostList, Morphism, Outcome};

/// Item of a rule label.
#[derive(Clone, Debug)]
pub enum Item {
    Int(i32),
    Str(&'static str),
    IntVar(usize),
    StrVar(usize),
    /// string variable between a literal prefix and suffix
    Affix(&'static str, usize, &'static str),
    /// list variable, only valid as sole item of a label
    ListVar(usize),
}

pub type Label = Vec<Item>;

pub struct Rule {
    pub nodes: Vec<Label>,
    pub edges: Vec<(usize, usize, Label)>,
    pub variables: usize,
}

pub struct Host {
    pub nodes: Vec<HostList>,
    pub edges: Vec<(usize, usize, HostList)>,
}

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn list<const N: usize>(atoms: [HostAtom; N]) -> HostList {
    atoms.into()
}

impl Rule {
    pub fn morphism(&self) -> Morphism {
        Morphism::new(self.nodes.len(), self.edges.len(), self.variables)
    }
}

fn match_item(item: &Item, atom: &HostAtom, m: &mut Morphism) -> Outcome {
    use HostAtom::{Int, Str};
    match (item, atom) {
        (Item::Int(i), Int(j)) if i == j => Outcome::Consistent,
        (Item::Str(s), Str(t)) if *s == t.as_str() => Outcome::Consistent,
        (Item::IntVar(id), Int(j)) => m.try_assign_integer(*id, *j),
        (Item::StrVar(id), Str(t)) => m.try_assign_string(*id, t),
        (Item::Affix(pre, id, suf), Str(t)) => match affix::remainder(pre, suf, t) {
            Some(rest) => m.try_assign_string(*id, rest),
            None => Outcome::Rejected,
        },
        _ => Outcome::Rejected,
    }
}

/// Match a rule label against a host label.
///
/// On success, return the number of newly bound variables.
/// On failure, the variables bound so far are unbound again.
pub fn match_label(label: &[Item], host: &[HostAtom], m: &mut Morphism) -> Result<Option<usize>, Error> {
    if let [Item::ListVar(id)] = label {
        return Ok(match m.try_assign_list(*id, host) {
            Outcome::Bound => Some(1),
            Outcome::Consistent => Some(0),
            Outcome::Rejected => None,
        });
    }
    if label.len() != host.len() {
        return Ok(None);
    }

    let mut bound = 0;
    for (item, atom) in label.iter().zip(host) {
        match match_item(item, atom, m) {
            Outcome::Bound => bound += 1,
            Outcome::Consistent => (),
            Outcome::Rejected => {
                m.undo(bound)?;
                return Ok(None);
            }
        }
    }
    Ok(Some(bound))
}

pub struct Search<'a> {
    rule: &'a Rule,
    host: &'a Host,
    used_nodes: FnvHashSet<usize>,
    used_edges: FnvHashSet<usize>,
}

impl<'a> Search<'a> {
    pub fn new(rule: &'a Rule, host: &'a Host) -> Self {
        Self {
            rule,
            host,
            used_nodes: Default::default(),
            used_edges: Default::default(),
        }
    }

    /// Call `found` for every total morphism, until it returns true.
    ///
    /// Returns whether `found` returned true.
    /// When this returns false, the morphism is in the same state as before.
    pub fn run<F>(&mut self, m: &mut Morphism, found: &mut F) -> Result<bool, Error>
    where
        F: FnMut(&Morphism) -> bool,
    {
        self.nodes(m, 0, found)
    }

    fn nodes<F>(&mut self, m: &mut Morphism, i: usize, found: &mut F) -> Result<bool, Error>
    where
        F: FnMut(&Morphism) -> bool,
    {
        let (rule, host) = (self.rule, self.host);
        if i == rule.nodes.len() {
            return self.edges(m, 0, found);
        }
        for (h, hlabel) in host.nodes.iter().enumerate() {
            if self.used_nodes.contains(&h) {
                continue;
            }
            if let Some(n) = match_label(&rule.nodes[i], hlabel, m)? {
                m.add_node_map(i, h, n);
                self.used_nodes.insert(h);
                if self.nodes(m, i + 1, found)? {
                    return Ok(true);
                }
                self.used_nodes.remove(&h);
                m.remove_node_map(i)?;
            }
        }
        Ok(false)
    }

    fn edges<F>(&mut self, m: &mut Morphism, j: usize, found: &mut F) -> Result<bool, Error>
    where
        F: FnMut(&Morphism) -> bool,
    {
        let (rule, host) = (self.rule, self.host);
        if j == rule.edges.len() {
            return Ok(found(m));
        }
        let (src, tgt, label) = &rule.edges[j];
        let (src, tgt) = (m.lookup_node(*src), m.lookup_node(*tgt));
        for (e, (hsrc, htgt, hlabel)) in host.edges.iter().enumerate() {
            if self.used_edges.contains(&e) || Some(*hsrc) != src || Some(*htgt) != tgt {
                continue;
            }
            if let Some(n) = match_label(label, hlabel, m)? {
                m.add_edge_map(j, e, n);
                self.used_edges.insert(e);
                if self.edges(m, j + 1, found)? {
                    return Ok(true);
                }
                self.used_edges.remove(&e);
                m.remove_edge_map(j)?;
            }
        }
        Ok(false)
    }
}

/// Find the first match of a rule, leaving it in the morphism.
pub fn find_first(rule: &Rule, host: &Host, m: &mut Morphism) -> Result<bool, Error> {
    Search::new(rule, host).run(m, &mut |_| true)
}
