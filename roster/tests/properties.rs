//! Property-based tests for `Person` equality and peer bookkeeping.

use std::rc::Rc;

use assert_that::prelude::*;
use proptest::prelude::*;
use roster::{Person, PersonAssert, PersonRef};

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,12}"
}

proptest! {
    /// Every person equals a fresh person built from the same name and age.
    #[test]
    fn prop_equality_is_reflexive(name in name_strategy(), age in any::<u32>()) {
        let person = Person::new(name.clone(), age);

        prop_assert_eq!(&person, &person);
        prop_assert_eq!(&person, &Person::new(name.clone(), age));
        PersonAssert::assert_that(&person).has_name(&name).has_age(age);
    }

    #[test]
    fn prop_different_fields_are_unequal(
        name in name_strategy(),
        other_name in name_strategy(),
        age in any::<u32>(),
        other_age in any::<u32>(),
    ) {
        prop_assume!(name != other_name || age != other_age);

        prop_assert_ne!(Person::new(name, age), Person::new(other_name, other_age));
    }

    /// Peers come back in insertion order, duplicates and self included.
    #[test]
    fn prop_add_peer_preserves_order_and_count(
        picks in prop::collection::vec(0_usize..4, 0..32),
    ) {
        let people: Vec<PersonRef> = (0..4_u32)
            .map(|i| Person::shared(format!("Person{i}"), 20 + i))
            .collect();
        let owner = &people[0];

        for &pick in &picks {
            owner.add_peer(&people[pick]);
        }

        let peers = owner.peers();
        prop_assert_eq!(peers.len(), picks.len());
        prop_assert_eq!(owner.peer_count(), picks.len());
        for (peer, &pick) in peers.iter().zip(&picks) {
            prop_assert!(Rc::ptr_eq(peer, &people[pick]));
        }
    }

    /// Peers whose only other handle was temporary are still listed.
    #[test]
    fn prop_temporary_peers_are_kept(
        adds in prop::collection::vec(prop::option::of(0_u32..100), 0..32),
    ) {
        let owner = Person::shared("Owner", 40);

        // None adds the owner itself, Some(age) a person created inline
        for add in &adds {
            match add {
                Some(age) => owner.add_peer(&Person::shared(format!("Temp{age}"), *age)),
                None => owner.add_peer(&owner),
            }
        }

        let expected: Vec<String> = adds
            .iter()
            .map(|add| match add {
                Some(age) => format!("Temp{age} ({age})"),
                None => "Owner (40)".to_string(),
            })
            .collect();
        let actual: Vec<String> = owner.peers().iter().map(|peer| peer.to_string()).collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(owner.peer_count(), adds.len());
        prop_assert_eq!(Rc::strong_count(&owner), 1);
    }

    /// Inspecting a person that lists itself terminates.
    #[test]
    fn prop_self_peer_inspection_terminates(name in name_strategy(), times in 1_usize..8) {
        let person = Person::shared(name.clone(), 1);
        for _ in 0..times {
            person.add_peer(&person);
        }

        let rendered = format!("{:?}", person);
        prop_assert_eq!(rendered.matches(&format!("{:?}", name)).count(), times + 1);
        assert_that(&person.peers())
            .has_size(times)
            .all_satisfy("are the person itself", |peer| Rc::ptr_eq(peer, &person));
    }
}
