//! Fixed ASCII folding table.
//!
//! Each entry maps a run of non-ASCII letters to the lowercase ASCII text that
//! replaces them. Both cases of a letter share one entry since folding always
//! runs after lowercasing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Replacement lookup built once from [`FOLDS`].
pub(crate) static FOLD_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(1024);
    for (replacement, letters) in FOLDS {
        for letter in letters.chars() {
            map.insert(letter, *replacement);
        }
    }
    map
});

const FOLDS: &[(&str, &str)] = &[
    (
        "a",
        "\u{24B6}\u{FF21}\u{00C0}\u{00C1}\u{00C2}\u{1EA6}\u{1EA4}\u{1EAA}\u{1EA8}\u{00C3}\u{0100}\u{0102}\
         \u{1EB0}\u{1EAE}\u{1EB4}\u{1EB2}\u{0226}\u{01E0}\u{00C4}\u{01DE}\u{1EA2}\u{00C5}\u{01FA}\u{01CD}\
         \u{0200}\u{0202}\u{1EA0}\u{1EAC}\u{1EB6}\u{1E00}\u{0104}\u{023A}\u{2C6F}\u{24D0}\u{FF41}\u{1E9A}\
         \u{00E0}\u{00E1}\u{00E2}\u{1EA7}\u{1EA5}\u{1EAB}\u{1EA9}\u{00E3}\u{0101}\u{0103}\u{1EB1}\u{1EAF}\
         \u{1EB5}\u{1EB3}\u{0227}\u{01E1}\u{00E4}\u{01DF}\u{1EA3}\u{00E5}\u{01FB}\u{01CE}\u{0201}\u{0203}\
         \u{1EA1}\u{1EAD}\u{1EB7}\u{1E01}\u{0105}\u{2C65}\u{0250}",
    ),
    ("aa", "\u{A732}\u{A733}"),
    ("ae", "\u{00C6}\u{01FC}\u{01E2}\u{00E6}\u{01FD}\u{01E3}"),
    ("ao", "\u{A734}\u{A735}"),
    ("au", "\u{A736}\u{A737}"),
    ("av", "\u{A738}\u{A73A}\u{A739}\u{A73B}"),
    ("ay", "\u{A73C}\u{A73D}"),
    (
        "b",
        "\u{24B7}\u{FF22}\u{1E02}\u{1E04}\u{1E06}\u{0243}\u{0182}\u{0181}\u{24D1}\u{FF42}\u{1E03}\u{1E05}\
         \u{1E07}\u{0180}\u{0183}\u{0253}",
    ),
    (
        "c",
        "\u{24B8}\u{FF23}\u{0106}\u{0108}\u{010A}\u{010C}\u{00C7}\u{1E08}\u{0187}\u{023B}\u{A73E}\u{24D2}\
         \u{FF43}\u{0107}\u{0109}\u{010B}\u{010D}\u{00E7}\u{1E09}\u{0188}\u{023C}\u{A73F}\u{2184}",
    ),
    (
        "d",
        "\u{24B9}\u{FF24}\u{1E0A}\u{010E}\u{1E0C}\u{1E10}\u{1E12}\u{1E0E}\u{0110}\u{018B}\u{018A}\u{0189}\
         \u{A779}\u{24D3}\u{FF44}\u{1E0B}\u{010F}\u{1E0D}\u{1E11}\u{1E13}\u{1E0F}\u{0111}\u{018C}\u{0256}\
         \u{0257}\u{A77A}",
    ),
    ("dz", "\u{01F1}\u{01C4}\u{01F2}\u{01C5}\u{01F3}\u{01C6}"),
    (
        "e",
        "\u{24BA}\u{FF25}\u{00C8}\u{00C9}\u{00CA}\u{1EC0}\u{1EBE}\u{1EC4}\u{1EC2}\u{1EBC}\u{0112}\u{1E14}\
         \u{1E16}\u{0114}\u{0116}\u{00CB}\u{1EBA}\u{011A}\u{0204}\u{0206}\u{1EB8}\u{1EC6}\u{0228}\u{1E1C}\
         \u{0118}\u{1E18}\u{1E1A}\u{0190}\u{018E}\u{24D4}\u{FF45}\u{00E8}\u{00E9}\u{00EA}\u{1EC1}\u{1EBF}\
         \u{1EC5}\u{1EC3}\u{1EBD}\u{0113}\u{1E15}\u{1E17}\u{0115}\u{0117}\u{00EB}\u{1EBB}\u{011B}\u{0205}\
         \u{0207}\u{1EB9}\u{1EC7}\u{0229}\u{1E1D}\u{0119}\u{1E19}\u{1E1B}\u{0247}\u{025B}\u{01DD}",
    ),
    ("f", "\u{24BB}\u{FF26}\u{1E1E}\u{0191}\u{A77B}\u{24D5}\u{FF46}\u{1E1F}\u{0192}\u{A77C}"),
    (
        "g",
        "\u{24BC}\u{FF27}\u{01F4}\u{011C}\u{1E20}\u{011E}\u{0120}\u{01E6}\u{0122}\u{01E4}\u{0193}\u{A7A0}\
         \u{A77D}\u{A77E}\u{24D6}\u{FF47}\u{01F5}\u{011D}\u{1E21}\u{011F}\u{0121}\u{01E7}\u{0123}\u{01E5}\
         \u{0260}\u{A7A1}\u{1D79}\u{A77F}",
    ),
    (
        "h",
        "\u{24BD}\u{FF28}\u{0124}\u{1E22}\u{1E26}\u{021E}\u{1E24}\u{1E28}\u{1E2A}\u{0126}\u{2C67}\u{2C75}\
         \u{A78D}\u{24D7}\u{FF48}\u{0125}\u{1E23}\u{1E27}\u{021F}\u{1E25}\u{1E29}\u{1E2B}\u{1E96}\u{0127}\
         \u{2C68}\u{2C76}\u{0265}",
    ),
    (
        "i",
        "\u{24BE}\u{FF29}\u{00CC}\u{00CD}\u{00CE}\u{0128}\u{012A}\u{012C}\u{0130}\u{00CF}\u{1E2E}\u{1EC8}\
         \u{01CF}\u{0208}\u{020A}\u{1ECA}\u{012E}\u{1E2C}\u{0197}\u{24D8}\u{FF49}\u{00EC}\u{00ED}\u{00EE}\
         \u{0129}\u{012B}\u{012D}\u{00EF}\u{1E2F}\u{1EC9}\u{01D0}\u{0209}\u{020B}\u{1ECB}\u{012F}\u{1E2D}\
         \u{0268}\u{0131}",
    ),
    ("j", "\u{24BF}\u{FF2A}\u{0134}\u{0248}\u{24D9}\u{FF4A}\u{0135}\u{01F0}\u{0249}"),
    (
        "k",
        "\u{24C0}\u{FF2B}\u{1E30}\u{01E8}\u{1E32}\u{0136}\u{1E34}\u{0198}\u{2C69}\u{A740}\u{A742}\u{A744}\
         \u{A7A2}\u{24DA}\u{FF4B}\u{1E31}\u{01E9}\u{1E33}\u{0137}\u{1E35}\u{0199}\u{2C6A}\u{A741}\u{A743}\
         \u{A745}\u{A7A3}",
    ),
    (
        "l",
        "\u{24C1}\u{FF2C}\u{013F}\u{0139}\u{013D}\u{1E36}\u{1E38}\u{013B}\u{1E3C}\u{1E3A}\u{0141}\u{023D}\
         \u{2C62}\u{2C60}\u{A748}\u{A746}\u{A780}\u{24DB}\u{FF4C}\u{0140}\u{013A}\u{013E}\u{1E37}\u{1E39}\
         \u{013C}\u{1E3D}\u{1E3B}\u{017F}\u{0142}\u{019A}\u{026B}\u{2C61}\u{A749}\u{A781}\u{A747}",
    ),
    ("lj", "\u{01C7}\u{01C8}\u{01C9}"),
    (
        "m",
        "\u{24C2}\u{FF2D}\u{1E3E}\u{1E40}\u{1E42}\u{2C6E}\u{019C}\u{24DC}\u{FF4D}\u{1E3F}\u{1E41}\u{1E43}\
         \u{0271}\u{026F}",
    ),
    (
        "n",
        "\u{24C3}\u{FF2E}\u{01F8}\u{0143}\u{00D1}\u{1E44}\u{0147}\u{1E46}\u{0145}\u{1E4A}\u{1E48}\u{0220}\
         \u{019D}\u{A790}\u{A7A4}\u{24DD}\u{FF4E}\u{01F9}\u{0144}\u{00F1}\u{1E45}\u{0148}\u{1E47}\u{0146}\
         \u{1E4B}\u{1E49}\u{019E}\u{0272}\u{0149}\u{A791}\u{A7A5}",
    ),
    ("nj", "\u{01CA}\u{01CB}\u{01CC}"),
    (
        "o",
        "\u{24C4}\u{FF2F}\u{00D2}\u{00D3}\u{00D4}\u{1ED2}\u{1ED0}\u{1ED6}\u{1ED4}\u{00D5}\u{1E4C}\u{022C}\
         \u{1E4E}\u{014C}\u{1E50}\u{1E52}\u{014E}\u{022E}\u{0230}\u{00D6}\u{022A}\u{1ECE}\u{0150}\u{01D1}\
         \u{020C}\u{020E}\u{01A0}\u{1EDC}\u{1EDA}\u{1EE0}\u{1EDE}\u{1EE2}\u{1ECC}\u{1ED8}\u{01EA}\u{01EC}\
         \u{00D8}\u{01FE}\u{0186}\u{019F}\u{A74A}\u{A74C}\u{24DE}\u{FF4F}\u{00F2}\u{00F3}\u{00F4}\u{1ED3}\
         \u{1ED1}\u{1ED7}\u{1ED5}\u{00F5}\u{1E4D}\u{022D}\u{1E4F}\u{014D}\u{1E51}\u{1E53}\u{014F}\u{022F}\
         \u{0231}\u{00F6}\u{022B}\u{1ECF}\u{0151}\u{01D2}\u{020D}\u{020F}\u{01A1}\u{1EDD}\u{1EDB}\u{1EE1}\
         \u{1EDF}\u{1EE3}\u{1ECD}\u{1ED9}\u{01EB}\u{01ED}\u{00F8}\u{01FF}\u{0254}\u{A74B}\u{A74D}\u{0275}",
    ),
    ("oi", "\u{01A2}\u{01A3}"),
    ("oo", "\u{A74E}\u{A74F}"),
    ("ou", "\u{0222}\u{0223}"),
    ("oe", "\u{008C}\u{0152}\u{009C}\u{0153}"),
    (
        "p",
        "\u{24C5}\u{FF30}\u{1E54}\u{1E56}\u{01A4}\u{2C63}\u{A750}\u{A752}\u{A754}\u{24DF}\u{FF50}\u{1E55}\
         \u{1E57}\u{01A5}\u{1D7D}\u{A751}\u{A753}\u{A755}",
    ),
    ("q", "\u{24C6}\u{FF31}\u{A756}\u{A758}\u{024A}\u{24E0}\u{FF51}\u{024B}\u{A757}\u{A759}"),
    (
        "r",
        "\u{24C7}\u{FF32}\u{0154}\u{1E58}\u{0158}\u{0210}\u{0212}\u{1E5A}\u{1E5C}\u{0156}\u{1E5E}\u{024C}\
         \u{2C64}\u{A75A}\u{A7A6}\u{A782}\u{24E1}\u{FF52}\u{0155}\u{1E59}\u{0159}\u{0211}\u{0213}\u{1E5B}\
         \u{1E5D}\u{0157}\u{1E5F}\u{024D}\u{027D}\u{A75B}\u{A7A7}\u{A783}",
    ),
    (
        "s",
        "\u{24C8}\u{FF33}\u{1E9E}\u{015A}\u{1E64}\u{015C}\u{1E60}\u{0160}\u{1E66}\u{1E62}\u{1E68}\u{0218}\
         \u{015E}\u{2C7E}\u{A7A8}\u{A784}\u{24E2}\u{FF53}\u{00DF}\u{015B}\u{1E65}\u{015D}\u{1E61}\u{0161}\
         \u{1E67}\u{1E63}\u{1E69}\u{0219}\u{015F}\u{023F}\u{A7A9}\u{A785}\u{1E9B}",
    ),
    (
        "t",
        "\u{24C9}\u{FF34}\u{1E6A}\u{0164}\u{1E6C}\u{021A}\u{0162}\u{1E70}\u{1E6E}\u{0166}\u{01AC}\u{01AE}\
         \u{023E}\u{A786}\u{24E3}\u{FF54}\u{1E6B}\u{1E97}\u{0165}\u{1E6D}\u{021B}\u{0163}\u{1E71}\u{1E6F}\
         \u{0167}\u{01AD}\u{0288}\u{2C66}\u{A787}",
    ),
    ("tz", "\u{A728}\u{A729}"),
    (
        "u",
        "\u{24CA}\u{FF35}\u{00D9}\u{00DA}\u{00DB}\u{0168}\u{1E78}\u{016A}\u{1E7A}\u{016C}\u{00DC}\u{01DB}\
         \u{01D7}\u{01D5}\u{01D9}\u{1EE6}\u{016E}\u{0170}\u{01D3}\u{0214}\u{0216}\u{01AF}\u{1EEA}\u{1EE8}\
         \u{1EEE}\u{1EEC}\u{1EF0}\u{1EE4}\u{1E72}\u{0172}\u{1E76}\u{1E74}\u{0244}\u{24E4}\u{FF55}\u{00F9}\
         \u{00FA}\u{00FB}\u{0169}\u{1E79}\u{016B}\u{1E7B}\u{016D}\u{00FC}\u{01DC}\u{01D8}\u{01D6}\u{01DA}\
         \u{1EE7}\u{016F}\u{0171}\u{01D4}\u{0215}\u{0217}\u{01B0}\u{1EEB}\u{1EE9}\u{1EEF}\u{1EED}\u{1EF1}\
         \u{1EE5}\u{1E73}\u{0173}\u{1E77}\u{1E75}\u{0289}",
    ),
    (
        "v",
        "\u{24CB}\u{FF36}\u{1E7C}\u{1E7E}\u{01B2}\u{A75E}\u{0245}\u{24E5}\u{FF56}\u{1E7D}\u{1E7F}\u{028B}\
         \u{A75F}\u{028C}",
    ),
    ("vy", "\u{A760}\u{A761}"),
    (
        "w",
        "\u{24CC}\u{FF37}\u{1E80}\u{1E82}\u{0174}\u{1E86}\u{1E84}\u{1E88}\u{2C72}\u{24E6}\u{FF57}\u{1E81}\
         \u{1E83}\u{0175}\u{1E87}\u{1E85}\u{1E98}\u{1E89}\u{2C73}",
    ),
    ("x", "\u{24CD}\u{FF38}\u{1E8A}\u{1E8C}\u{24E7}\u{FF58}\u{1E8B}\u{1E8D}"),
    (
        "y",
        "\u{24CE}\u{FF39}\u{1EF2}\u{00DD}\u{0176}\u{1EF8}\u{0232}\u{1E8E}\u{0178}\u{1EF6}\u{1EF4}\u{01B3}\
         \u{024E}\u{1EFE}\u{24E8}\u{FF59}\u{1EF3}\u{00FD}\u{0177}\u{1EF9}\u{0233}\u{1E8F}\u{00FF}\u{1EF7}\
         \u{1E99}\u{1EF5}\u{01B4}\u{024F}\u{1EFF}",
    ),
    (
        "z",
        "\u{24CF}\u{FF3A}\u{0179}\u{1E90}\u{017B}\u{017D}\u{1E92}\u{1E94}\u{01B5}\u{0224}\u{2C7F}\u{2C6B}\
         \u{A762}\u{24E9}\u{FF5A}\u{017A}\u{1E91}\u{017C}\u{017E}\u{1E93}\u{1E95}\u{01B6}\u{0225}\u{0240}\
         \u{2C6C}\u{A763}",
    ),
    ("hv", "\u{0195}"),
];
