use harfang_symbols::{SymbolRegistry, SymbolType};

fn main() {
    harfang_symbols::init_logging();

    let mut reg = SymbolRegistry::new();
    reg.add_dictionary("french");

    let open = reg.gen_sym("", "open").expect("default dictionary always exists");
    reg.alias_symbol("french", "ouvrir", "", "open").unwrap();
    reg.alias_symbol("", "launch", "", "open").unwrap();

    println!("open = {} ({})", open, SymbolType::Unspecified);

    reg.select_dictionary("french");
    println!("in french: {}", reg.display_name(open));

    reg.list_dictionaries();
    reg.list_symbols("");
    reg.list_symbols("french");
}
