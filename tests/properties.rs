//! Property tests over arbitrary inputs.

use huffcode::{analyze, build_tree, compress, decompress, generate_codes, HuffmanCodec};
use proptest::prelude::*;

fn small_alphabet() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..12, 1..400)
}

proptest! {
    #[test]
    fn roundtrip(data in prop::collection::vec(any::<u8>(), 1..600)) {
        let codec = HuffmanCodec::from_symbols(&data).unwrap();
        let bits = codec.encode(&data).unwrap();
        prop_assert_eq!(codec.decode(&bits).unwrap(), data);
    }

    #[test]
    fn roundtrip_text(text in "\\PC{1,200}") {
        let input: Vec<char> = text.chars().collect();
        let encoded = compress(&input).unwrap();
        prop_assert_eq!(decompress(&encoded).unwrap(), input);
    }

    #[test]
    fn codes_are_prefix_free(data in small_alphabet()) {
        let root = build_tree(&analyze(data.iter().copied())).unwrap();
        let codes = generate_codes(&root);
        prop_assert!(codes.is_prefix_free());
        prop_assert_eq!(codes.len(), root.leaf_count());
    }

    #[test]
    fn root_weight_is_input_length(data in small_alphabet()) {
        let root = build_tree(&analyze(data.iter().copied())).unwrap();
        prop_assert_eq!(root.weight(), data.len());
    }

    #[test]
    fn repeated_runs_agree(data in small_alphabet()) {
        let first = generate_codes(&build_tree(&analyze(data.iter().copied())).unwrap());
        let second = generate_codes(&build_tree(&analyze(data.iter().copied())).unwrap());
        prop_assert_eq!(first.lengths(), second.lengths());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_cost_ignores_symbol_order(data in small_alphabet()) {
        let mut data = data;
        let table = analyze(data.iter().copied());
        let cost = generate_codes(&build_tree(&table).unwrap()).encoded_len(&table);

        data.reverse();
        let reversed = analyze(data.iter().copied());
        let reversed_cost = generate_codes(&build_tree(&reversed).unwrap()).encoded_len(&reversed);
        prop_assert_eq!(cost, reversed_cost);
    }

    #[test]
    fn average_length_within_entropy_bound(data in small_alphabet()) {
        let table = analyze(data.iter().copied());
        prop_assume!(table.len() >= 2);
        let codes = generate_codes(&build_tree(&table).unwrap());
        let avg = codes.average_length(&table);
        let entropy = table.entropy();
        prop_assert!(avg >= entropy - 1e-9, "avg {} below entropy {}", avg, entropy);
        prop_assert!(avg < entropy + 1.0, "avg {} not below entropy + 1 ({})", avg, entropy);
    }

    #[test]
    fn frequent_symbols_get_shorter_codes(data in small_alphabet()) {
        let table = analyze(data.iter().copied());
        let codes = generate_codes(&build_tree(&table).unwrap());
        for (a, count_a) in table.iter() {
            for (b, count_b) in table.iter() {
                if count_a > count_b {
                    prop_assert!(codes.get(a).unwrap().len() <= codes.get(b).unwrap().len());
                }
            }
        }
    }
}
