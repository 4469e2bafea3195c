use kerl::convert::{trits_to_trytes, trytes_to_trits};
use kerl::vectors::{parse_vectors, run_all};
use kerl::{Config, Kerl, HASH_LENGTH};

const KERL_VEC: &str = include_str!("data/kerl.vec");
const KERL_REFERENCE_VEC: &str = include_str!("data/kerl_reference.vec");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_kerl_vectors() {
    init_tracing();
    let vectors = parse_vectors(KERL_VEC).unwrap();
    assert_eq!(vectors.len(), 5);
    let report = run_all(&vectors, Config::default());
    assert!(report.all_passed(), "{}: {:?}", report.summary(), report.details);
}

#[test]
fn test_kerl_reference_vectors() {
    init_tracing();
    let vectors = parse_vectors(KERL_REFERENCE_VEC).unwrap();
    assert_eq!(vectors.len(), 2);
    let report = run_all(&vectors, Config::reference());
    assert!(report.all_passed(), "{}: {:?}", report.summary(), report.details);
}

#[test]
fn test_absorb_multi_squeeze() {
    init_tracing();
    let input = "9MIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH";
    let expected = "G9JYBOMPUXHYHKSNRNMMSSZCSHOFYOYNZRSZMAAYWDYEIMVVOGKPJBVBM9TDPULSFUNMTVXRKFIDOHUXXVYDLFSZYZTWQYTE9SPYYWYTXJYQ9IFGYOLZXWZBKWZN9QOOTBQMWMUBLEWUEEASRHRTNIQWJQNDWRYLCA";

    let mut trits = trytes_to_trits(input).unwrap();
    let mut kerl = Kerl::new();
    kerl.absorb(&mut trits).unwrap();
    let mut hash = vec![0; 2 * HASH_LENGTH];
    kerl.squeeze(&mut hash).unwrap();
    assert_eq!(trits_to_trytes(&hash).unwrap(), expected);

    // the input's last trit was 1 and is cleared in place
    assert_eq!(trits[HASH_LENGTH - 1], 0);
}

#[test]
fn test_split_squeeze_matches_vector() {
    let input = "DRYXBHCOXNOTLYFCO9ZLMSXX9VNHWYGRCJ999TQ9LUFMW9PGXNOQGKGUGXNI9MZQTCETWICWJWVPMPZUF";
    let expected = "MPUWQYMGIRVCHQPAVR9NSUUUIYZAWZHEKKBIV9KBHKGOHJHGRZGLTFYICJVSUTUSCIDCAMUJCJ9YHFUDYIDAQOZTQSDBVWCYIKLMOUDQGCKXSAKKBVYG9IOWHMNAV9UPNPQRFUWHECPQLETLLZGLP9UKXYPWMBYAAXSXEJGC9BKZYYVQNSEAJKZGTGFNISPNABUWZWYOCDJYGQKQFAEFPPCVWZFVNNGXBLIKBOYEIOIXKXHAH9A";

    let mut kerl = Kerl::new();
    kerl.absorb(&mut trytes_to_trits(input).unwrap()).unwrap();
    let mut out = String::new();
    for _ in 0..3 {
        let mut block = vec![0; HASH_LENGTH];
        kerl.squeeze(&mut block).unwrap();
        out.push_str(&trits_to_trytes(&block).unwrap());
    }
    assert_eq!(out, expected);
}

#[test]
fn test_hash_is_reproducible() {
    let zero = vec![0; HASH_LENGTH];
    let h0 = kerl::hash(&zero, HASH_LENGTH).unwrap();
    let h1 = kerl::hash(&zero, HASH_LENGTH).unwrap();
    assert_eq!(h0, h1);
    assert_eq!(
        trits_to_trytes(&h0).unwrap(),
        "9NGBYIGJTUTYPACOHYWUGLWO9OASWBNWCIADXRWRSZPOSRYJTHDANSCVG9KULYERRBPBPLZHA9BEONKZW"
    );
}
