use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// Shared handle to a [`Person`]. Peers are added through handles.
pub type PersonRef = Rc<Person>;

/// A person with a name, an age and an ordered list of peers.
///
/// Two people are equal when their names and ages are equal. Peers never
/// take part in equality, ordering, hashing or `Debug` recursion, so a
/// person may list itself as a peer.
///
/// Peers are kept alive by the person that lists them. Listing yourself
/// holds only a weak handle, so a self-peer never leaks; two people listing
/// each other do form a reference cycle.
///
/// ```
/// use roster::Person;
///
/// let john = Person::shared("John", 23);
/// let paul = Person::shared("Paul", 24);
///
/// john.add_peer(&paul);
/// john.add_peer(&john);
///
/// assert_eq!(john.peers(), vec![paul.clone(), john.clone()]);
/// ```
///
/// A person is not `Clone`: a copied self-peer would still point at the
/// original. Share a [`PersonRef`] instead.
///
/// ```compile_fail
/// let john = roster::Person::new("John", 23);
/// let _copy = john.clone();
/// ```
#[cfg_attr(feature = "assertions", derive(assert_that::Assertions))]
pub struct Person {
    name: String,
    age: u32,
    #[cfg_attr(feature = "assertions", assertions(skip))]
    peers: RefCell<Vec<Peer>>,
}

enum Peer {
    Other(PersonRef),
    // Weak so a person listing itself stays droppable
    Myself(Weak<Person>),
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
            peers: RefCell::new(Vec::new()),
        }
    }

    pub fn shared(name: impl Into<String>, age: u32) -> PersonRef {
        Rc::new(Self::new(name, age))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Appends `peer`. Duplicates and `self` are allowed.
    pub fn add_peer(&self, peer: &PersonRef) {
        tracing::trace!(person = %self, peer = %peer, "adding peer");
        let entry = if std::ptr::eq(Rc::as_ptr(peer), self) {
            Peer::Myself(Rc::downgrade(peer))
        } else {
            Peer::Other(Rc::clone(peer))
        };
        self.peers.borrow_mut().push(entry);
    }

    /// Peers in the order they were added, duplicates and `self` included.
    pub fn peers(&self) -> Vec<PersonRef> {
        self.peers
            .borrow()
            .iter()
            .filter_map(|peer| match peer {
                Peer::Other(other) => Some(Rc::clone(other)),
                Peer::Myself(me) => me.upgrade(),
            })
            .collect()
    }

    pub fn peer_count(&self) -> usize {
        self.peers.borrow().len()
    }

    pub fn to_record(&self) -> PersonRecord {
        PersonRecord {
            name: self.name.clone(),
            age: self.age,
        }
    }
}

/// The placeholder used when no person is available: `Noname`, aged 0.
impl Default for Person {
    fn default() -> Self {
        Person::new("Noname", 0)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.age.hash(state);
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.age.cmp(&other.age))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("peers", &PeerNames(self))
            .finish()
    }
}

// Peers by name only; a self-peer would otherwise recurse forever
struct PeerNames<'a>(&'a Person);

impl fmt::Debug for PeerNames<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let person = self.0;
        let peers = person.peers.borrow();
        f.debug_list()
            .entries(peers.iter().map(|peer| match peer {
                Peer::Other(other) => other.name.as_str(),
                Peer::Myself(_) => person.name.as_str(),
            }))
            .finish()
    }
}

/// Owned snapshot of a person's name and age, without peers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "assertions", derive(assert_that::Assertions))]
pub struct PersonRecord {
    pub name: String,
    pub age: u32,
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        person.to_record()
    }
}
