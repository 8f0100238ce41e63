use katex_macros::{format, push_preamble, MacroTable};

fn main() {
    let table = MacroTable::builtin();

    match format::to_katex_script(table) {
        Ok(script) => println!("{}", script),
        Err(e) => eprintln!("Error while serializing: {}", e),
    }

    let mut preamble = String::new();
    match push_preamble(&mut preamble, table, Default::default()) {
        Ok(()) => println!("{}", preamble),
        Err(e) => eprintln!("Error while writing the preamble: {}", e),
    }
}
