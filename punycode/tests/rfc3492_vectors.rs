use punycode::{decode_to_string, encode_str, to_ascii, to_unicode, DomainConverter, ErrorPolicy};

/// Sample strings from RFC 3492 section 7.1 (lowercase forms).
const SAMPLES: &[(&str, &str)] = &[
    ("他们为什么不说中文", "ihqwcrb4cv8a8dqg056pqjye"),
    ("他們爲什麽不說中文", "ihqwctvzc91f659drss3x8bo0yb"),
    ("Pročprostěnemluvíčesky", "Proprostnemluvesky-uyb24dma41a"),
    (
        "PorquénopuedensimplementehablarenEspañol",
        "PorqunopuedensimplementehablarenEspaol-fmd56a",
    ),
    (
        "TạisaohọkhôngthểchỉnóitiếngViệt",
        "TisaohkhngthchnitingVit-kjcr8268qyxafd2f1b9g",
    ),
    ("3年B組金八先生", "3B-ww4c5e180e575a65lsy2b"),
    (
        "安室奈美恵-with-SUPER-MONKEYS",
        "-with-SUPER-MONKEYS-pc58ag80a8qai00g7n9n",
    ),
    (
        "Hello-Another-Way-それぞれの場所",
        "Hello-Another-Way--fc4qua05auwb3674vfr0b",
    ),
    ("ひとつ屋根の下2", "2-u9tlzr9756bt3uc0v"),
    ("MajiでKoiする5秒前", "MajiKoi5-783gue6qz075azm5e"),
    ("パフィーdeルンバ", "de-jg4avhby1noc0d"),
    ("そのスピードで", "d9juau41awczczp"),
    ("-> $1.00 <-", "-> $1.00 <--"),
];

#[test]
fn test_encode_rfc_samples() {
    for (unicode, encoded) in SAMPLES {
        assert_eq!(
            encode_str(unicode).unwrap(),
            *encoded,
            "encoding {}",
            unicode
        );
    }
}

#[test]
fn test_decode_rfc_samples() {
    for (unicode, encoded) in SAMPLES {
        assert_eq!(
            decode_to_string(encoded).unwrap(),
            *unicode,
            "decoding {}",
            encoded
        );
    }
}

#[test]
fn test_decode_rfc_samples_uppercase() {
    for (unicode, encoded) in SAMPLES {
        // Only the digit stream is case-insensitive; the basic prefix is literal
        let (basic, digits) = match encoded.rfind('-') {
            Some(pos) => (&encoded[..=pos], &encoded[pos + 1..]),
            None => ("", *encoded),
        };
        let shouted = format!("{}{}", basic, digits.to_ascii_uppercase());
        assert_eq!(decode_to_string(&shouted).unwrap(), *unicode);
    }
}

#[test]
fn test_domain_with_rfc_labels() {
    let domain = "他们为什么不说中文.example.com";
    let ascii = to_ascii(domain).unwrap();
    assert_eq!(ascii, "xn--ihqwcrb4cv8a8dqg056pqjye.example.com");
    assert_eq!(to_unicode(&ascii).unwrap(), domain);
}

#[test]
fn test_mixed_separators_and_email() {
    let ascii = to_ascii("info@ひとつ屋根の下2。example｡jp").unwrap();
    assert_eq!(ascii, "info@xn--2-u9tlzr9756bt3uc0v.example.jp");
    assert_eq!(
        to_unicode(&ascii).unwrap(),
        "info@ひとつ屋根の下2.example.jp"
    );
}

#[test]
fn test_best_effort_domain() {
    let converter = DomainConverter::new().with_policy(ErrorPolicy::BestEffort);
    assert_eq!(
        converter
            .to_unicode("xn--d9juau41awczczp.xn--abc-z.example")
            .unwrap(),
        "そのスピードで.xn--abc-z.example"
    );
    assert!(to_unicode("xn--d9juau41awczczp.xn--abc-z.example").is_err());
}
