use sunpanelapp::api::{SunpanelApi, SunpanelPaths};
use sunpanelapp::model::Collection;
use sunpanelapp::ordering::{check_order, Direction};
use sunpanelapp::store::fs::FileStore;
use sunpanelapp::store::Gateway;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, SunpanelApi<FileStore>) {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join(".sunpanel");
    let api = SunpanelApi::new(
        FileStore::new_fs(data_dir.clone()),
        SunpanelPaths {
            data_dir,
            config_dir: None,
        },
    );
    (temp, api)
}

fn labels(api: &SunpanelApi<FileStore>, collection: Collection) -> Vec<String> {
    api.list_records(collection, None)
        .unwrap()
        .listed_records
        .iter()
        .map(|dp| dp.record.label())
        .collect()
}

fn seed(api: &mut SunpanelApi<FileStore>, titles: &[&str]) {
    for title in titles {
        api.create_record(Collection::Services, &[format!("title={}", title)])
            .unwrap();
    }
}

#[test]
fn new_records_go_to_the_end() {
    let (_temp, mut api) = setup();
    seed(&mut api, &["Rooftop", "Battery", "Chargers"]);

    let records = api.store().list_all(Collection::Services).unwrap();
    let orders: Vec<Option<u32>> = records.iter().map(|r| r.order_index).collect();
    assert_eq!(orders, vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn move_and_delete_keep_the_collection_contiguous() {
    let (_temp, mut api) = setup();
    seed(&mut api, &["a", "b", "c", "d", "e"]);

    api.move_record(Collection::Services, &["e"], Direction::Up)
        .unwrap();
    api.move_record(Collection::Services, &["1"], Direction::Down)
        .unwrap();
    assert_eq!(
        labels(&api, Collection::Services),
        vec!["b", "a", "c", "e", "d"]
    );

    api.delete_records(Collection::Services, &["2-3"]).unwrap();
    assert_eq!(labels(&api, Collection::Services), vec!["b", "e", "d"]);

    let records = api.store().list_all(Collection::Services).unwrap();
    assert!(check_order(&records).is_healthy());
}

#[test]
fn boundary_moves_change_nothing_on_disk() {
    let (temp, mut api) = setup();
    seed(&mut api, &["a", "b"]);
    let path = temp.path().join(".sunpanel").join("services.json");
    let before = fs::read_to_string(&path).unwrap();

    let result = api
        .move_record(Collection::Services, &["1"], Direction::Up)
        .unwrap();
    assert!(result.messages[0].content.contains("top"));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn collections_are_independent() {
    let (_temp, mut api) = setup();
    seed(&mut api, &["a", "b"]);
    api.create_record(
        Collection::Testimonials,
        &["author=Dana", "quote=Bills halved"],
    )
    .unwrap();

    let testimonial = &api.store().list_all(Collection::Testimonials).unwrap()[0];
    assert_eq!(testimonial.order_index, Some(0));

    api.delete_records(Collection::Services, &["1"]).unwrap();
    assert_eq!(
        api.store().list_all(Collection::Testimonials).unwrap()[0].order_index,
        Some(0)
    );
}

#[test]
fn legacy_documents_are_repaired_by_doctor() {
    let (temp, mut api) = setup();
    let data_dir = temp.path().join(".sunpanel");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("nav-items.json"),
        r#"[
            {"id": "6f1c1d1e-4a55-4a1e-9a3c-2f3c2b1a0e01", "order": 4,
             "created_at": "2024-03-01T10:00:00Z", "updated_at": "2024-03-01T10:00:00Z",
             "fields": {"label": "Contact", "href": "/contact"}},
            {"id": "6f1c1d1e-4a55-4a1e-9a3c-2f3c2b1a0e02",
             "created_at": "2024-03-01T10:00:00Z", "updated_at": "2024-03-01T10:00:00Z",
             "fields": {"label": "Home", "href": "/"}},
            {"id": "6f1c1d1e-4a55-4a1e-9a3c-2f3c2b1a0e03", "order_index": 2,
             "created_at": "2024-03-01T10:00:00Z", "updated_at": "2024-03-01T10:00:00Z",
             "fields": {"label": "Projects", "href": "/projects"}}
        ]"#,
    )
    .unwrap();

    let report = api
        .doctor(Collection::NavItems, false)
        .unwrap()
        .order_report
        .unwrap();
    assert!(!report.is_healthy());
    assert_eq!(report.missing.len(), 1);

    api.doctor(Collection::NavItems, true).unwrap();
    assert_eq!(
        labels(&api, Collection::NavItems),
        vec!["Home", "Projects", "Contact"]
    );
    let records = api.store().list_all(Collection::NavItems).unwrap();
    assert!(check_order(&records).is_healthy());
}

#[test]
fn edits_cannot_touch_order() {
    let (_temp, mut api) = setup();
    seed(&mut api, &["a"]);

    let err = api
        .update_record(Collection::Services, &["1"], &["order_index:=5"])
        .unwrap_err();
    assert!(err.to_string().contains("reordering"));

    api.update_record(Collection::Services, &["1"], &["title=Alpha", "icon=sun"])
        .unwrap();
    let record = &api.store().list_all(Collection::Services).unwrap()[0];
    assert_eq!(record.label(), "Alpha");
    assert_eq!(record.order_index, Some(0));
}
