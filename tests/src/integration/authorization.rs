//! # Authorization Chaining
//!
//! Randomized checks that thing and spec writes are admitted only with the
//! owning identity's key, and that rejected writes leave the ledger untouched.

#[cfg(test)]
mod tests {
    use crate::fixtures::{random_name, random_nonce, sign, ALICE};
    use iot_registry::{
        AuthFailure, CanonicalMessage, InMemoryLedger, LedgerStore, RegisterIdentityTx,
        RegisterSpecTx, RegisterThingTx, RegistryApi, RegistryError, RegistryService,
    };
    use k256::ecdsa::SigningKey;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ROUNDS: usize = 16;

    struct Owner {
        name: String,
        key: SigningKey,
    }

    fn random_key(rng: &mut StdRng) -> SigningKey {
        loop {
            if let Ok(key) = SigningKey::from_slice(&rng.gen::<[u8; 32]>()) {
                return key;
            }
        }
    }

    fn register_owner(
        service: &RegistryService,
        ledger: &mut InMemoryLedger,
        rng: &mut StdRng,
    ) -> Owner {
        let owner = Owner {
            name: random_name(rng, 12),
            key: random_key(rng),
        };
        let mut tx = RegisterIdentityTx {
            owner_name: owner.name.clone(),
            public_key: owner.key.verifying_key().to_sec1_bytes().to_vec(),
            data: random_name(rng, 8),
            signature: vec![],
        };
        tx.signature = sign(&owner.key, &tx.canonical_message());
        service.register_identity(ledger, &tx).unwrap();
        owner
    }

    fn thing_tx(owner: &Owner, signer: &SigningKey, rng: &mut StdRng) -> RegisterThingTx {
        let alias_count = rng.gen_range(0..4);
        let mut tx = RegisterThingTx {
            nonce: random_nonce(rng),
            owner_name: owner.name.clone(),
            aliases: (0..alias_count).map(|_| random_name(rng, 10)).collect(),
            spec: random_name(rng, 6),
            data: random_name(rng, 20),
            signature: vec![],
        };
        tx.signature = sign(signer, &tx.canonical_message());
        tx
    }

    fn spec_tx(owner: &Owner, signer: &SigningKey, rng: &mut StdRng) -> RegisterSpecTx {
        let mut tx = RegisterSpecTx {
            spec_name: random_name(rng, 14),
            owner_name: owner.name.clone(),
            data: random_name(rng, 20),
            signature: vec![],
        };
        tx.signature = sign(signer, &tx.canonical_message());
        tx
    }

    #[test]
    fn test_only_the_owner_key_is_admitted() {
        let mut rng = StdRng::seed_from_u64(0x10_7e_57);
        let service = RegistryService::new();
        let mut ledger = InMemoryLedger::new();
        let owners: Vec<Owner> = (0..4)
            .map(|_| register_owner(&service, &mut ledger, &mut rng))
            .collect();

        for round in 0..ROUNDS {
            let owner = &owners[round % owners.len()];
            let intruder = &owners[(round + 1) % owners.len()];

            let forged = thing_tx(owner, &intruder.key, &mut rng);
            let before = ledger.len();
            assert_eq!(
                service.register_thing(&mut ledger, &forged).unwrap_err(),
                RegistryError::AuthFailure(AuthFailure::BadSignature)
            );
            let forged = spec_tx(owner, &intruder.key, &mut rng);
            assert_eq!(
                service.register_spec(&mut ledger, &forged).unwrap_err(),
                RegistryError::AuthFailure(AuthFailure::BadSignature)
            );
            assert_eq!(ledger.len(), before);

            let genuine = thing_tx(owner, &owner.key, &mut rng);
            let writes = service.register_thing(&mut ledger, &genuine).unwrap();
            assert_eq!(writes.len(), genuine.aliases.len() + 1);

            let genuine = spec_tx(owner, &owner.key, &mut rng);
            service.register_spec(&mut ledger, &genuine).unwrap();
            assert_eq!(
                service.get_spec(&ledger, &genuine.spec_name).unwrap().owner_name,
                owner.name
            );
        }
    }

    #[test]
    fn test_any_field_change_breaks_the_signature() {
        let mut rng = StdRng::seed_from_u64(42);
        let service = RegistryService::new();
        let mut ledger = InMemoryLedger::new();
        let owner = register_owner(&service, &mut ledger, &mut rng);
        let before = ledger.clone();

        for _ in 0..ROUNDS {
            let mut tx = thing_tx(&owner, &owner.key, &mut rng);
            match rng.gen_range(0..3) {
                0 => tx.data.push('!'),
                1 => tx.spec.push('!'),
                _ => tx.aliases.push(random_name(&mut rng, 5)),
            }
            assert_eq!(
                service.register_thing(&mut ledger, &tx).unwrap_err(),
                RegistryError::AuthFailure(AuthFailure::BadSignature)
            );
        }

        for _ in 0..ROUNDS {
            let mut tx = spec_tx(&owner, &owner.key, &mut rng);
            let position = rng.gen_range(0..tx.signature.len());
            tx.signature[position] ^= 0x01;
            assert!(matches!(
                service.register_spec(&mut ledger, &tx).unwrap_err(),
                RegistryError::AuthFailure(_)
            ));
        }

        assert_eq!(
            ledger.keys().collect::<Vec<_>>(),
            before.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_unregistered_owner_never_writes() {
        let mut rng = StdRng::seed_from_u64(7);
        let service = RegistryService::new();
        let mut ledger = InMemoryLedger::new();

        for _ in 0..ROUNDS {
            let ghost = Owner {
                name: random_name(&mut rng, 12),
                key: random_key(&mut rng),
            };
            let err = service
                .register_thing(&mut ledger, &thing_tx(&ghost, &ghost.key, &mut rng))
                .unwrap_err();
            assert_eq!(err, RegistryError::UnknownOwner { name: ghost.name.clone() });

            let err = service
                .register_spec(&mut ledger, &spec_tx(&ghost, &ghost.key, &mut rng))
                .unwrap_err();
            assert_eq!(err, RegistryError::UnknownOwner { name: ghost.name });
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_messages_are_not_domain_separated() {
        // An identity signature over "Alice:a:b" is also a valid signature for
        // a thing with no aliases, data "a" and spec "b".
        let service = RegistryService::new();
        let mut ledger = InMemoryLedger::new();

        let mut identity = ALICE.owner_tx();
        identity.data = "a:b".to_string();
        identity.signature = ALICE.sign(&identity.canonical_message());
        service.register_identity(&mut ledger, &identity).unwrap();

        let thing = RegisterThingTx {
            nonce: vec![0xab; 16],
            owner_name: "Alice".to_string(),
            aliases: vec![],
            spec: "b".to_string(),
            data: "a".to_string(),
            signature: identity.signature.clone(),
        };
        service.register_thing(&mut ledger, &thing).unwrap();
        assert!(ledger.get(&format!("Thing: {}", "ab".repeat(16))).unwrap().is_some());
    }
}
