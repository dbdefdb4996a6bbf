//======================================================================
// HARMONIA Crate Test Suite
//======================================================================
#![cfg(test)]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use digest::Digest;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use crate::{
    harmonia32, harmonia32_hex, harmonia64, harmonia64_hex, harmonia_ng, harmonia_ng_hex,
    hash_xof, hash_xof_hex, Harmonia32Hasher, Harmonia64Hasher, HarmoniaNgHasher, HarmoniaXof,
    InvalidState,
};

const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog";

//======================================================================
// Known-answer vectors
//======================================================================

const VECTORS_64: &[(&[u8], &str)] = &[
    (b"", "8e93065179f8c553ca045158f30c68877ce6d7e2fd01f1bcede29f60555b5ad7"),
    (b"abc", "e9f33578db17980d7831a573ade188e2726960b2097fcc28176970ceae8142ae"),
    (b"Harmonia", "3c7119d280bbe3d16265ca349e4d62b8ca2ae595b85d8753d3939840f8808689"),
    (b"HARMONIA-NG", "24d1e707f34c0fa85e2959f604152078191623d84edc612c1597266449ec41fa"),
    (PANGRAM, "f7c5515bd7869d1f5b7cda9d422903bb80876c1cb06ea2d1b2fc158391797861"),
];

const VECTORS_32: &[(&[u8], &str)] = &[
    (b"", "1aa2b61690fbc68a26ec185582c798a3d2eab950127bd00bd3c0ca3fd44abb35"),
    (b"abc", "90f6eb37b14761fa487f2a7135d84cccfd6fc10133c0553fe75ee7ef86fc136f"),
    (b"Harmonia", "b17bac87e7fa7f376b31f406f398281fab650d169b43ff4dce5ca91b292163e0"),
    (b"HARMONIA-NG", "f531f1d5bf2c0ffb871e9a2542c245a1437b64c7214631c7548146405aabbd46"),
    (PANGRAM, "1925fa28248c8a487d31e43b412cb94cc30d9ca44419f1c6536418a2d9f6a3ba"),
];

// Published HARMONIA-NG v1.0 vectors.
const VECTORS_NG: &[(&[u8], &str)] = &[
    (b"", "f0861e3ad1a2a438b4ceea78d14f21074dcd712b073917b28d7ae7fad8f6a562"),
    (b"abc", "45479ad34d41000863df94e0d5e2c36ba92048c7aff21361f74210594c2510c2"),
    (b"Harmonia", "11cd23650f8fd4818848bc6f09da18b06403ed6f5250447c5d1036730cb8987c"),
    (b"HARMONIA-NG", "6d310650be2092be611cf35ea8dcc46b8199a3f6299398fa68dcf73f80f8a334"),
    (PANGRAM, "05a015d792c2146a00d941ba342e0dbb219ff7ef6da48d05caf8310d3c844172"),
];

// Messages of `.0` repeated 'x' bytes straddle the 56 (mod 64) padding
// boundary at one and two blocks.
const BOUNDARY_64: &[(usize, &str)] = &[
    (55, "2b48806e19d6ca2502fd4d954d8efc1a77c6d4f4a67ff87a36d093ab798c56b3"),
    (56, "bce97f72b2a718da063f32195eedb487fd1521eeac8739fb2dc21139f3647b7c"),
    (57, "baecdac2a70ceda49e54a3997ef938413c2a31efa46617af7edf65335b957278"),
    (119, "1183ee8e9cc0ad260a75c035cfa7250042b9dbdf6cd5256a47cea718272d036f"),
    (120, "d0fb2a2df9a57366b04b0624191eaaa96cddad9dce58c5e8050b5f52332a3507"),
    (121, "bb021a4d98200ef3c9fd5e469551f2062a3850011363332ccc4e9ba91df46756"),
];

const BOUNDARY_32: &[(usize, &str)] = &[
    (55, "8d337391c105b777a64a29bae3e0dfea734a89676541383713a182b46196548b"),
    (56, "16e85aa55e6c08f67b29f24ba07343b9a3b9374162bb8c1c3f2a793fa46bc0bc"),
    (57, "feb4cd6f4f86d095ddcc235e5e73b99ee54019d1838adb4f49206fdfa2455405"),
    (119, "6d23bb0005b5d19812b9335deb78643341bf3711a31443ee9532f2891cf74221"),
    (120, "2a73c8603e0ed8d8dd0a432ad79bcd75fd903625d8c69b068202338acbc30e1d"),
    (121, "b78635faceba9e1898dd2f378e2d68f079b39f7a2187adc48973e00bbf95f4cf"),
];

const BOUNDARY_NG: &[(usize, &str)] = &[
    (55, "0bb27ac097cd7a12ea45f0402e308d9ae2c23237e2bb7562197153106f441db2"),
    (56, "b9b128f86aac275e848032bbcbfa9c11cd917c54f781bb0c0695de7bec8e77b5"),
    (57, "fd1de21a9b4bb1690b677848103a03bce45e0ab05a7b011e8f6a8f262930ad73"),
    (119, "01c2fb2613ba7c5d517376370480b67ca7b9c54636f4ebdff5a5b1d306e84255"),
    (120, "3d5fe95b578657baffc0d9fa30167a31c066c67401c211d01b5e50e6f29e9b5a"),
    (121, "7a81ad7bf5a22f720713c33072875c39e398f7dee334f3c8b1a5b13bcf8be981"),
];

// XOF vectors, 32-byte outputs.
const VECTORS_XOF: &[(&[u8], &str)] = &[
    (b"", "24816df7aff34daa9cce47dceb95428d200861af57f48c52a61860d6db72f8d2"),
    (b"abc", "254ff6b9f4ef53147e41178d99e95a1a07f586ed5db31ae93544829beb3faa69"),
    (b"HARMONIA-NG", "b447a920aea376885e1654370643d163add5d5427b19732bb971ca0739c06d3c"),
];

#[test]
fn harmonia64_known_answers() {
    for (input, expected) in VECTORS_64 {
        assert_eq!(harmonia64_hex(input), *expected, "input: {input:?}");
    }
}

#[test]
fn harmonia32_known_answers() {
    for (input, expected) in VECTORS_32 {
        assert_eq!(harmonia32_hex(input), *expected, "input: {input:?}");
    }
}

#[test]
fn harmonia_ng_known_answers() {
    for (input, expected) in VECTORS_NG {
        assert_eq!(harmonia_ng_hex(input), *expected, "input: {input:?}");
    }
}

#[test]
fn xof_known_answers() {
    for (input, expected) in VECTORS_XOF {
        assert_eq!(hash_xof_hex(input, 32), *expected, "input: {input:?}");
    }
    // One-byte-of-room (31), exact-block (32) and overflow (33) absorbs
    // exercise all three padding shapes.
    assert_eq!(
        hash_xof_hex(&[b'x'; 31], 32),
        "56cfbdb492b7cba00f3375a06325f97ccc8435f868e6a21e9c62cbadadb0db2c",
    );
    assert_eq!(
        hash_xof_hex(&[b'x'; 32], 32),
        "1a6b652616d615b1c7ecd5e7c239ea613bbe859e6384786c9bc490f239f3fac7",
    );
    assert_eq!(
        hash_xof_hex(&[b'x'; 33], 32),
        "56052ef36f466b958f6e29d6dfe24de04d48dda9d1883911fdf21a63e49a738a",
    );
    // Longer outputs extend the shorter ones.
    assert_eq!(
        hash_xof_hex(b"", 64),
        "24816df7aff34daa9cce47dceb95428d200861af57f48c52a61860d6db72f8d2\
         e23e157f554cdaa0d0ae3007113d96c4b4f45c55088d9e5a6e491a226c3a7cb2",
    );
    assert_eq!(
        hash_xof_hex(b"HARMONIA-NG", 64),
        "b447a920aea376885e1654370643d163add5d5427b19732bb971ca0739c06d3c\
         7ee19c5be1d7d7f9ac1d1814a2cf710faf9a295c2b6dabb03ba2b00205eef857",
    );
}

#[test]
fn padding_boundaries() {
    for &(len, expected) in BOUNDARY_64 {
        assert_eq!(harmonia64_hex(&vec![b'x'; len]), expected, "len: {len}");
    }
    for &(len, expected) in BOUNDARY_32 {
        assert_eq!(harmonia32_hex(&vec![b'x'; len]), expected, "len: {len}");
    }
    for &(len, expected) in BOUNDARY_NG {
        assert_eq!(harmonia_ng_hex(&vec![b'x'; len]), expected, "len: {len}");
    }
}

//======================================================================
// Digest properties
//======================================================================

#[test]
fn digests_are_32_bytes_and_deterministic() {
    for msg in [&b""[..], b"a", &[0u8; 200][..]] {
        assert_eq!(harmonia64(msg).len(), 32);
        assert_eq!(harmonia64(msg), harmonia64(msg));
        assert_eq!(harmonia32(msg), harmonia32(msg));
        assert_eq!(harmonia_ng(msg), harmonia_ng(msg));
    }
}

#[test]
fn incremental_update_matches_oneshot() {
    let mut rng = ChaCha8Rng::from_seed([1; 32]);
    let mut data = vec![0u8; 300];
    rng.fill_bytes(&mut data);

    for chunk_size in [1, 7, 13, 64, 65, 299] {
        let mut h64 = Harmonia64Hasher::new();
        let mut h32 = Harmonia32Hasher::new();
        let mut hng = HarmoniaNgHasher::new();
        for chunk in data.chunks(chunk_size) {
            h64.update(chunk);
            h32.update(chunk);
            hng.update(chunk);
        }
        assert_eq!(<[u8; 32]>::from(h64.finalize()), harmonia64(&data));
        assert_eq!(<[u8; 32]>::from(h32.finalize()), harmonia32(&data));
        assert_eq!(<[u8; 32]>::from(hng.finalize()), harmonia_ng(&data));
    }
}

#[test]
fn hasher_reset_restores_initial_state() {
    let mut hasher = HarmoniaNgHasher::new();
    hasher.update(b"garbage");
    Digest::reset(&mut hasher);
    hasher.update(b"Harmonia");
    assert_eq!(<[u8; 32]>::from(hasher.finalize()), harmonia_ng(b"Harmonia"));
}

#[test]
fn cross_variant_outputs_differ() {
    let outputs = [
        harmonia64(b"abc").to_vec(),
        harmonia32(b"abc").to_vec(),
        harmonia_ng(b"abc").to_vec(),
        hash_xof(b"abc", 32),
    ];
    for (i, a) in outputs.iter().enumerate() {
        for b in &outputs[i + 1..] {
            assert_ne!(a, b, "constructions are independent");
        }
    }
}

fn mean_avalanche(hash: fn(&[u8]) -> [u8; 32], seed: u8) -> f64 {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    let trials = 500;
    let mut total_bits = 0u32;
    for _ in 0..trials {
        let mut msg = [0u8; 32];
        rng.fill_bytes(&mut msg);
        let before = hash(&msg);
        let bit = rng.next_u32() as usize % (msg.len() * 8);
        msg[bit / 8] ^= 1 << (bit % 8);
        let after = hash(&msg);
        total_bits += before
            .iter()
            .zip(after.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>();
    }
    f64::from(total_bits) / f64::from(trials) / 256.0 * 100.0
}

#[test]
fn avalanche_effect() {
    for (hash, seed) in [
        (harmonia64 as fn(&[u8]) -> [u8; 32], 42),
        (harmonia32, 43),
        (harmonia_ng, 44),
    ] {
        let percent = mean_avalanche(hash, seed);
        assert!(
            (45.0..=55.0).contains(&percent),
            "avalanche out of range: {percent:.1}%"
        );
    }
}

//======================================================================
// Sponge (XOF) state machine
//======================================================================

#[test]
fn xof_absorb_chaining() {
    let data: Vec<u8> = (0u8..97).collect();
    let mut whole = HarmoniaXof::new();
    whole.absorb(&data).unwrap();
    let expected = whole.squeeze(40);

    for k in 0..=data.len() {
        let mut split = HarmoniaXof::new();
        split.absorb(&data[..k]).unwrap().absorb(&data[k..]).unwrap();
        assert_eq!(split.squeeze(40), expected, "split at {k}");
    }
}

#[test]
fn xof_resumable_squeeze() {
    for a in (0..80).step_by(7) {
        for b in (0..80).step_by(9) {
            let mut split = HarmoniaXof::new();
            split.absorb(b"resumable").unwrap();
            let mut out = split.squeeze(a);
            out.extend_from_slice(&split.squeeze(b));

            let mut whole = HarmoniaXof::new();
            whole.absorb(b"resumable").unwrap();
            assert_eq!(out, whole.squeeze(a + b), "a={a} b={b}");
        }
    }
}

#[test]
fn xof_squeeze_into_matches_squeeze() {
    let mut a = HarmoniaXof::new();
    a.absorb(b"into").unwrap();
    let mut buf = [0u8; 50];
    a.squeeze_into(&mut buf);

    let mut b = HarmoniaXof::new();
    b.absorb(b"into").unwrap();
    assert_eq!(buf.to_vec(), b.squeeze(50));
}

#[test]
fn absorb_after_squeeze_fails() {
    let mut xof = HarmoniaXof::new();
    xof.absorb(b"data").unwrap();
    // A zero-length squeeze still flips the phase.
    let _ = xof.squeeze(0);
    assert_eq!(xof.absorb(b"more").err(), Some(InvalidState));
    // The squeezing side keeps working.
    assert_eq!(xof.squeeze(32), hash_xof(b"data", 32));
}

#[test]
fn xof_clone_is_independent() {
    let mut original = HarmoniaXof::new();
    original.absorb(b"fork ").unwrap();

    let mut forked = original.clone();
    original.absorb(b"left").unwrap();
    forked.absorb(b"right").unwrap();

    assert_eq!(original.squeeze(32), hash_xof(b"fork left", 32));
    assert_eq!(forked.squeeze(32), hash_xof(b"fork right", 32));

    // Cloning mid-squeeze copies the pending output buffer too.
    let mut squeezer = HarmoniaXof::new();
    squeezer.absorb(b"pending").unwrap();
    let head = squeezer.squeeze(10);
    let mut snapshot = squeezer.clone();
    let mut reference = HarmoniaXof::new();
    reference.absorb(b"pending").unwrap();
    let whole = reference.squeeze(42);
    assert_eq!([head.clone(), squeezer.squeeze(32)].concat(), whole);
    assert_eq!([head, snapshot.squeeze(32)].concat(), whole);
}

#[test]
fn hex_output_is_lowercase() {
    let hexes = [
        harmonia64_hex(b"Case"),
        harmonia32_hex(b"Case"),
        harmonia_ng_hex(b"Case"),
        hash_xof_hex(b"Case", 32),
    ];
    for h in hexes {
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
