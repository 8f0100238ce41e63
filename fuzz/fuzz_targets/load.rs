#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Any table which loads must survive a round trip and compile to a preamble.
    let Ok(table) = katex_macros::format::from_katex_script(data) else {
        return;
    };

    let json = katex_macros::format::to_json(&table).unwrap();
    let reloaded = katex_macros::format::from_json(&json).unwrap();
    assert_eq!(reloaded, table);

    let mut preamble = String::new();
    katex_macros::push_preamble(&mut preamble, &table, Default::default()).unwrap();
    assert_eq!(preamble.is_empty(), table.is_empty());
});
