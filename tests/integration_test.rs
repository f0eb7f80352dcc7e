use functor_recipe::directory::FriendDirectory;
use functor_recipe::framework::{flat_map_sequence, flat_map_sequence_staged, probe::CallProbe, Optional};
use functor_recipe::lifecycle::{Playground, PlaygroundConfig, FRIENDS_JSON_VAR};
use functor_recipe::model::{Address, Friend};
use functor_recipe::record::Record;
use serde_json::json;
use std::io::Write;

/// map and flat_map on a present value apply the function exactly once.
#[test]
fn test_present_map_and_flat_map() {
    let double = CallProbe::new(|x: i32| x * 2);
    assert_eq!(Optional::present(5).map(double.func()), Optional::present(10));
    assert_eq!(double.calls(), 1);

    let describe = |x: i32| Optional::present(format!("#{x}"));
    assert_eq!(Optional::present(5).flat_map(describe), describe(5));
}

/// Neither combinator touches its function on the absent path.
#[test]
fn test_absent_never_invokes_function() {
    let probe = CallProbe::new(|x: i32| Optional::present(x));

    assert_eq!(Optional::<i32>::Absent.map(probe.func()), Optional::Absent);
    assert_eq!(Optional::<i32>::Absent.flat_map(probe.func()), Optional::Absent);
    assert_eq!(probe.calls(), 0);
}

/// [x1, x2, x3] with f(x2) absent keeps [f(x1), f(x3)] in order, both ways.
#[test]
fn test_sequence_flat_map_drops_absent() {
    let f = |x: u8| match x {
        1 => Optional::present("a"),
        3 => Optional::present("b"),
        _ => Optional::Absent,
    };

    assert_eq!(flat_map_sequence([1u8, 2, 3], f), vec!["a", "b"]);
    assert_eq!(flat_map_sequence_staged([1u8, 2, 3], f), vec!["a", "b"]);
    assert!(flat_map_sequence(Vec::<u8>::new(), f).is_empty());
}

/// The full friend document from the walkthrough, end to end.
#[test]
fn test_friend_directory_from_document() {
    let document = json!([
        {
            "firstname": "Jimmy",
            "lastname": "Swifty",
            "phonenumber": "1234567",
            "address": { "city": "Tampere", "street": "Hämeenkatu" }
        },
        { "firstname": "Jimmy", "phonenumber": "1234567" },
        {
            "firstname": "Timmy",
            "lastname": "Swifty",
            "phonenumber": "7654321",
            "address": {}
        }
    ]);

    let directory = FriendDirectory::from_json_str(&document.to_string()).expect("document is an array");

    assert_eq!(
        directory.friends(),
        &[
            Friend::new("Jimmy", "Swifty", "1234567", Some(Address::new("Tampere", "Hämeenkatu"))),
            Friend::new("Timmy", "Swifty", "7654321", None),
        ]
    );
    assert_eq!(directory.addresses(), vec![Address::new("Tampere", "Hämeenkatu")]);
}

/// Records built from JSON serialize back to the same field layout.
#[test]
fn test_friend_serializes_with_source_field_names() {
    let source = json!({
        "firstname": "Jimmy",
        "lastname": "Swifty",
        "phonenumber": "1234567",
        "address": { "city": "Tampere", "street": "Hämeenkatu" }
    });

    let friend = Friend::from_value(&source).into_option().expect("friend parses");
    assert_eq!(serde_json::to_value(&friend).unwrap(), source);
}

/// The playground reads a configured file instead of the bundled list.
#[test]
fn test_playground_with_configured_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!([
            { "firstname": "Ada", "lastname": "Lovelace", "phonenumber": "1815",
              "address": { "city": "London", "street": "St James's Square" } },
            { "firstname": "Ghost" }
        ])
    )
    .unwrap();

    let path = file.path().to_string_lossy().into_owned();
    let config = PlaygroundConfig::from_lookup(|key| (key == FRIENDS_JSON_VAR).then(|| path.clone()));
    let report = Playground::from_config(&config).expect("file loads").run();

    assert_eq!(report.friends_loop.len(), 1);
    assert_eq!(report.friends_mapped.len(), 2);
    assert_eq!(report.addresses_mapped, vec![Some(Address::new("London", "St James's Square")), None]);
    assert_eq!(report.addresses_flat_mapped, vec![Address::new("London", "St James's Square")]);
}

/// A document whose root isn't an array stops the playground with an error.
#[test]
fn test_playground_rejects_non_array_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"firstname": "Jimmy"}}"#).unwrap();

    let config = PlaygroundConfig {
        friends_path: Some(file.path().to_path_buf()),
    };
    let err = Playground::from_config(&config).unwrap_err();
    assert_eq!(err.to_string(), "Directory root must be an array, found object");
}
