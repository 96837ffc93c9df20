//! # Keyspace Behavior
//!
//! Pins the persisted keyspace: which namespaces are checked, which are
//! written, and how the two differ for nonces and aliases.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ALICE, BOB, GERALD};
    use iot_registry::{
        ConflictKind, InMemoryLedger, LedgerKey, LedgerStore, RegistryApi, RegistryError,
        RegistryService,
    };

    fn ledger_with_owners(service: &RegistryService) -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        for registrant in [ALICE, GERALD, BOB] {
            service
                .register_identity(&mut ledger, &registrant.owner_tx())
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_every_written_key_is_in_the_keyspace() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);
        service.initialize(&mut ledger, "bootstrap").unwrap();
        service.register_thing(&mut ledger, &ALICE.thing_tx()).unwrap();
        service.register_spec(&mut ledger, &ALICE.spec_tx()).unwrap();

        for key in ledger.keys() {
            let parsed = LedgerKey::parse(key).unwrap_or_else(|| panic!("unparsed key {key}"));
            assert_eq!(parsed.to_string(), key);
            assert!(!matches!(parsed, LedgerKey::Nonce(_)), "nonce key written: {key}");
        }
    }

    #[test]
    fn test_thing_nonce_reuse_is_not_detected() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);
        service.register_thing(&mut ledger, &ALICE.thing_tx()).unwrap();

        // Gerald claims Alice's nonce: the probe reads `Nonce: `, which is never
        // written, so the second registration replaces the first.
        let hijack = GERALD.thing_tx_with(ALICE.nonce_bytes(), vec!["Gadget".to_string()]);
        service.register_thing(&mut ledger, &hijack).unwrap();

        let view = service.get_thing(&ledger, ALICE.nonce).unwrap();
        assert_eq!(view.owner_name, "Gerald");
        assert_eq!(view.aliases, vec!["Gadget".to_string()]);
        // Alice's aliases survive and now resolve to Gerald's thing
        assert_eq!(service.get_thing(&ledger, "Foo").unwrap().owner_name, "Gerald");
    }

    #[test]
    fn test_nonce_probe_key_blocks_registration() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);
        ledger
            .put(&LedgerKey::Nonce(ALICE.nonce).to_string(), b"occupied")
            .unwrap();

        let err = service
            .register_thing(&mut ledger, &ALICE.thing_tx())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::NameConflict {
                kind: ConflictKind::Nonce,
                name: ALICE.nonce.to_string()
            }
        );
        assert!(!ledger.contains("Alias:Foo"));
    }

    #[test]
    fn test_alias_collides_only_with_owner_names() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);

        let err = service
            .register_thing(
                &mut ledger,
                &ALICE.thing_tx_with(vec![1; 16], vec!["Widget".into(), "Bob".into()]),
            )
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::NameConflict {
                kind: ConflictKind::Alias,
                name: "Bob".to_string()
            }
        );

        // Another thing's alias is not an owner name, so it is taken over
        service.register_thing(&mut ledger, &ALICE.thing_tx()).unwrap();
        service
            .register_thing(
                &mut ledger,
                &BOB.thing_tx_with(vec![2; 16], vec!["Foo".to_string()]),
            )
            .unwrap();
        assert_eq!(service.get_thing(&ledger, "Foo").unwrap().owner_name, "Bob");
        assert_eq!(service.get_thing(&ledger, "Bar").unwrap().owner_name, "Alice");
    }

    #[test]
    fn test_alias_then_owner_with_same_name() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);
        service.register_thing(&mut ledger, &ALICE.thing_tx()).unwrap();

        // Owner names are not checked against aliases
        let mut foo = BOB;
        foo.name = "Foo";
        service.register_identity(&mut ledger, &foo.owner_tx()).unwrap();

        assert_eq!(service.get_owner(&ledger, "Foo").unwrap().pubkey, BOB.public_key);
        assert_eq!(service.get_thing(&ledger, "Foo").unwrap().owner_name, "Alice");
    }

    #[test]
    fn test_duplicate_aliases_in_one_transaction() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);

        let tx = ALICE.thing_tx_with(vec![3; 16], vec!["Twin".into(), "Twin".into()]);
        let writes = service.register_thing(&mut ledger, &tx).unwrap();

        assert_eq!(writes.len(), 3);
        assert_eq!(
            service.get_thing(&ledger, "Twin").unwrap().aliases,
            vec!["Twin".to_string(), "Twin".to_string()]
        );
    }

    #[test]
    fn test_thing_lookup_by_uppercase_nonce_is_not_found() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);
        service.register_thing(&mut ledger, &ALICE.thing_tx()).unwrap();

        let upper = ALICE.nonce.to_uppercase();
        assert!(matches!(
            service.get_thing(&ledger, &upper),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let service = RegistryService::new();
        let mut ledger = ledger_with_owners(&service);
        ledger.put("Spec: test spec", &[]).unwrap();
        ledger.put("Thing: 00", &[]).unwrap();

        assert!(matches!(
            service.get_thing(&ledger, "00"),
            Err(RegistryError::NotFound { .. })
        ));
        service.register_spec(&mut ledger, &ALICE.spec_tx()).unwrap();
        assert_eq!(service.get_spec(&ledger, "test spec").unwrap().owner_name, "Alice");
    }
}
