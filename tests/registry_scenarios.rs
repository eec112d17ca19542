use harfang_symbols::{Symbol, SymbolRegistry, SymbolType};

#[test]
fn french_greeting_translates_to_default() {
    let mut reg = SymbolRegistry::new();
    reg.add_dictionary("french");

    let bonjour = reg.gen_sym("french", "bonjour").expect("french exists");
    assert!(bonjour.id() > 0);
    assert_eq!(bonjour.kind(), SymbolType::Unspecified);

    let hello = reg
        .alias_symbol("default", "hello", "french", "bonjour")
        .expect("alias source exists");
    assert_eq!(hello, bonjour);
    assert_eq!(reg.get_symbol("default", "hello"), Some(bonjour));
    assert_eq!(reg.symbol_name("default", bonjour.id()), Some("hello"));
}

#[test]
fn lookup_in_unknown_dictionary_creates_nothing() {
    let reg = SymbolRegistry::new();
    assert_eq!(reg.get_symbol("nonexistent_dict", "x"), None);
    assert!(reg.get_dictionary("nonexistent_dict").is_none());
    assert_eq!(reg.dictionaries().count(), 1);
}

#[test]
fn sentinel_collapses_misses_to_id_zero() {
    let mut reg = SymbolRegistry::new();
    let miss = Symbol::or_empty(reg.get_symbol("nonexistent_dict", "x"));
    assert_eq!(miss, Symbol::EMPTY);
    assert_eq!(miss.id(), 0);
    assert_eq!(miss.kind(), SymbolType::Unspecified);

    let hit = Symbol::or_empty(reg.gen_sym("", "x"));
    assert!(!hit.is_empty());
}

#[test]
fn synonyms_and_translations_share_one_id() {
    let mut reg = SymbolRegistry::new();
    reg.add_dictionary("french");
    reg.add_dictionary("german");

    let close = reg.gen_sym("", "close").unwrap();
    reg.alias_symbol("", "shut", "", "close").unwrap();
    reg.alias_symbol("french", "fermer", "", "close").unwrap();
    reg.alias_symbol("german", "schliessen", "french", "fermer").unwrap();

    for (dict, word) in [
        ("", "close"),
        ("default", "shut"),
        ("french", "fermer"),
        ("german", "schliessen"),
    ] {
        assert_eq!(reg.get_symbol(dict, word), Some(close), "{dict}/{word}");
    }
    assert_eq!(reg.last_id(), close.id());
    // "close" sorts before "shut"
    assert_eq!(reg.symbol_name("default", close.id()), Some("close"));
}

#[test]
fn selection_changes_rendering_not_lookup() {
    let mut reg = SymbolRegistry::new();
    reg.add_dictionary("french");
    let click = reg.gen_sym("", "click").unwrap();
    reg.alias_symbol("french", "clic", "", "click").unwrap();

    reg.select_dictionary("french");
    assert_eq!(reg.selected_dictionary().name(), "french");
    assert_eq!(reg.display_name(click), "clic");
    // the empty name is still the default dictionary
    assert_eq!(reg.get_symbol("", "clic"), None);
}
