use proptest::prelude::*;

use bn_cli::branch_name::extract_task_id;

proptest! {
    #[test]
    fn extracted_id_is_uppercase_key_and_number(s in any::<String>()) {
        if let Some(id) = extract_task_id(&s) {
            let (key, num) = id.split_once('-').unwrap();
            prop_assert!(key.len() >= 2);
            prop_assert!(key.bytes().all(|b| b.is_ascii_uppercase()));
            prop_assert!(!num.is_empty());
            prop_assert!(num.bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(s.to_ascii_uppercase().contains(&id));
        }
    }

    #[test]
    fn embedded_id_is_found(
        prefix in "[ .:/0-9]{0,10}",
        key in "[A-Za-z]{2,6}",
        num in "[0-9]{1,5}",
        suffix in "[ .?/]{0,10}",
    ) {
        let input = format!("{prefix}{key}-{num}{suffix}");
        let expected = format!("{}-{num}", key.to_ascii_uppercase());
        prop_assert_eq!(extract_task_id(&input), Some(expected));
    }
}
