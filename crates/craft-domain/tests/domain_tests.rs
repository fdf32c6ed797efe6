use craft_domain::{Color, DomainError, ItemInstance, ItemTemplate, MaterialId, QualityTier, TemplateBook, TemplateId};

#[test]
fn spawn_uses_template_defaults() {
    let shirt = ItemTemplate::new("shirt", "Shirt").with_max_durability(120);
    let item = ItemInstance::spawn(&shirt, Some(MaterialId::new("cloth")));
    assert_eq!(item.template, TemplateId::new("shirt"));
    assert_eq!(item.quality, Some(QualityTier::Normal));
    assert_eq!(item.durability, 120);
    assert_eq!(item.color, Color::WHITE);
}

#[test]
fn spawn_without_quality_component() {
    let slab = ItemTemplate::new("slab", "Stone slab").without_quality();
    let item = ItemInstance::spawn(&slab, None);
    assert_eq!(item.quality, None);
}

#[test]
fn spawned_instances_get_distinct_ids() {
    let shirt = ItemTemplate::new("shirt", "Shirt");
    let a = ItemInstance::spawn(&shirt, None);
    let b = ItemInstance::spawn(&shirt, None);
    assert_ne!(a.id, b.id);
}

#[test]
fn set_durability_within_template_maximum() {
    let shirt = ItemTemplate::new("shirt", "Shirt").with_max_durability(100);
    let mut item = ItemInstance::spawn(&shirt, None);

    item.set_durability(&shirt, 40).unwrap();
    assert_eq!(item.durability, 40);
}

#[test]
fn set_durability_above_maximum_is_rejected() {
    let shirt = ItemTemplate::new("shirt", "Shirt").with_max_durability(100);
    let mut item = ItemInstance::spawn(&shirt, None);

    let err = item.set_durability(&shirt, 150).unwrap_err();
    assert_eq!(err, DomainError::InvalidDurability { got: 150, max: 100 });
    // la instancia no cambia ante un valor inválido
    assert_eq!(item.durability, 100);
}

#[test]
fn template_book_lookup() {
    let mut book = TemplateBook::new();
    book.insert(ItemTemplate::new("shirt", "Shirt"));

    assert!(book.contains(&TemplateId::new("shirt")));
    assert!(book.get(&TemplateId::new("shirt")).is_ok());

    let missing = book.get(&TemplateId::new("pants"));
    assert_eq!(missing.unwrap_err(), DomainError::UnknownTemplate("pants".to_string()));
}
