use folio_engine::Pendant;

#[test]
fn pendant_smoke_step_and_drag() {
    let mut pendant = Pendant::new("{}").unwrap();
    for _ in 0..30 {
        assert!(pendant.step(1.0 / 60.0));
    }
    assert_eq!(pendant.frame(), 30);

    let vertices = pendant.vertex_count();
    assert_eq!(vertices, 51 * 4);
    assert_eq!(pendant.positions().len(), vertices * 3);
    assert_eq!(pendant.normals().len(), vertices * 3);
    assert_eq!(pendant.uvs().len(), vertices * 2);
    assert_eq!(pendant.index_count(), 50 * 24);
    assert_eq!(pendant.joints().len(), 4 * 3);

    assert!(pendant.pointer_down(0.0, 0.0));
    pendant.pointer_move(0.25, 0.1);
    pendant.step(1.0 / 60.0);
    assert!(pendant.dragging());
    assert_eq!(pendant.pointer_up(), "thrown");

    for _ in 0..60 {
        pendant.step(1.0 / 60.0);
    }
    let stats = pendant.get_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(!stats.dragging());
    assert!(pendant.card_position().iter().all(|v| v.is_finite()));
}
