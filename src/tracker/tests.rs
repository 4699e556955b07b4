#[cfg(test)]
mod info_hash_tests {
    use crate::tracker::structs::info_hash::InfoHash;

    const HEX: &str = "c12fe1c06bba254a9dc9f519b335aa7c1367a88a";

    #[test]
    fn test_info_hash_parse_and_display() {
        let hash: InfoHash = HEX.parse().unwrap();
        assert_eq!(hash.0[0], 0xc1);
        assert_eq!(hash.0[19], 0x8a);
        assert_eq!(hash.to_string(), HEX);
    }

    #[test]
    fn test_info_hash_parse_uppercase() {
        let hash: InfoHash = HEX.to_uppercase().parse().unwrap();
        assert_eq!(hash.to_string(), HEX, "Display should always be lowercase");
    }

    #[test]
    fn test_info_hash_parse_wrong_length() {
        assert!("abcd".parse::<InfoHash>().is_err());
        assert!(format!("{HEX}00").parse::<InfoHash>().is_err());
    }

    #[test]
    fn test_info_hash_parse_invalid_characters() {
        let invalid = "z12fe1c06bba254a9dc9f519b335aa7c1367a88a";
        assert!(invalid.parse::<InfoHash>().is_err());
    }

    #[test]
    fn test_info_hash_try_from_slice() {
        let bytes = [7u8; 20];
        let hash = InfoHash::try_from(&bytes[..]).unwrap();
        assert_eq!(hash, InfoHash([7u8; 20]));
        assert!(InfoHash::try_from(&bytes[..19]).is_err());
    }

    #[test]
    fn test_info_hash_serde() {
        let hash: InfoHash = HEX.parse().unwrap();
        let serialized = serde_json::to_string(&hash).unwrap();
        assert_eq!(serialized, format!("\"{HEX}\""));
        let deserialized: InfoHash = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, hash);
        assert!(serde_json::from_str::<InfoHash>("\"nothex\"").is_err());
    }
}
