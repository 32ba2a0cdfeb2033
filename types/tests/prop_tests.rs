use proptest::prelude::*;

use launch_types::{Allocation, ParticipantId, Registrant};

proptest! {
    /// ParticipantId roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn participant_id_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = ParticipantId::new(bytes);
        prop_assert_eq!(id.as_bytes(), &bytes);
    }

    /// Hex formatting parses back to the same identifier.
    #[test]
    fn participant_id_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = ParticipantId::new(bytes);
        let parsed = ParticipantId::from_hex(&id.to_hex()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// Ordering of identifiers built from u128 matches integer ordering.
    #[test]
    fn participant_id_ordering(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(ParticipantId::from(a) <= ParticipantId::from(b), a <= b);
    }

    /// Registrant bincode serialization roundtrip.
    #[test]
    fn registrant_bincode_roundtrip(bytes in prop::array::uniform32(0u8..), score in any::<u64>()) {
        let entry = Registrant::new(ParticipantId::new(bytes), score);
        let encoded = bincode::serialize(&entry).unwrap();
        let decoded: Registrant = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    /// checked_mul agrees with u128 arithmetic and never wraps.
    #[test]
    fn allocation_checked_mul(unit in any::<u64>(), tickets in any::<u64>()) {
        let expected = (unit as u128).checked_mul(tickets as u128);
        let got = Allocation::from(unit).checked_mul(tickets).map(|a| a.raw());
        prop_assert_eq!(got, expected);
    }
}
