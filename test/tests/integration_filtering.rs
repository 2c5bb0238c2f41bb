use framesync_host::{FilterChangedEvent, Host, HostConfig};
use framesync_shared::{Filter, Role};
use framesync_test::{exchange, init_logger, TestPair, CHILD_ORIGIN};

fn names(host: &Host) -> Vec<String> {
    host.filtered_users()
        .into_iter()
        .map(|user| user.name.clone())
        .collect()
}

#[test]
fn filter_selects_matching_records() {
    init_logger();
    let mut pair = TestPair::new();
    assert_eq!(names(&pair.host).len(), 3);

    pair.host.select_filter(Filter::Only(Role::Designer));
    assert_eq!(names(&pair.host), vec!["Sam Smith".to_string()]);

    pair.host.select_filter(Filter::Only(Role::Manager));
    assert_eq!(names(&pair.host), vec!["Jane Doe".to_string()]);

    pair.host.select_filter(Filter::All);
    assert_eq!(names(&pair.host).len(), 3);
}

#[test]
fn embedded_filter_choice_drives_host_list() {
    init_logger();
    let mut pair = TestPair::new();
    pair.mount_and_load();
    exchange(&mut pair);

    pair.embedded_mut().select_filter(Filter::Only(Role::Developer));
    let mut events = exchange(&mut pair).host;

    assert_eq!(pair.host.filter(), Filter::Only(Role::Developer));
    assert_eq!(names(&pair.host), vec!["John Doe".to_string()]);
    assert_eq!(
        events.read::<FilterChangedEvent>().collect::<Vec<_>>(),
        vec![Filter::Only(Role::Developer)]
    );
}

#[test]
fn custom_directory_is_filtered() {
    init_logger();
    let json = format!(
        r#"{{
            "sync": {{ "trusted_origin": "{}" }},
            "directory": [
                {{ "id": "1", "name": "Ada", "email": "ada@example.com", "role": "developer" }},
                {{ "id": "2", "name": "Grace", "email": "grace@example.com", "role": "developer" }},
                {{ "id": "3", "name": "Linus", "email": "linus@example.com", "role": "manager" }}
            ]
        }}"#,
        CHILD_ORIGIN
    );
    let mut host = Host::new(HostConfig::from_json(&json).expect("valid config"));

    host.select_filter(Filter::Only(Role::Developer));
    assert_eq!(names(&host), vec!["Ada".to_string(), "Grace".to_string()]);

    host.select_filter(Filter::Only(Role::Designer));
    assert!(host.filtered_users().is_empty());
}
