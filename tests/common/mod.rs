use inventory::collect;
use katex_macros::format;
use libtest_mimic::{Arguments, Conclusion, Failed, Trial};

pub struct TestCase {
    pub name: &'static str,
    pub test: fn() -> Result<(), Failed>,
}
collect!(TestCase);

pub fn test() -> Conclusion {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let args = Arguments::from_args();
    let tests = inventory::iter::<TestCase>
        .into_iter()
        .map(|TestCase { name, test }| Trial::test(*name, *test))
        .collect::<Vec<_>>();
    libtest_mimic::run(&args, tests)
}

/// Load `input`, save it in both formats, and check that loading the output gives back the
/// same table.
pub fn round_trip(input: &str) -> Result<(), Failed> {
    let table = format::from_json(input)?;

    let json = format::to_json(&table)?;
    let reloaded = format::from_json(&json)?;
    if reloaded != table {
        return Err(format!("json round trip changed the table:\n{input}\n{json}").into());
    }

    let script = format::to_katex_script(&table)?;
    let reloaded = format::from_katex_script(&script)?;
    if reloaded != table {
        return Err(format!("script round trip changed the table:\n{input}\n{script}").into());
    }

    for (name, entry) in table.iter() {
        if reloaded.get(name) != Some(entry) {
            return Err(format!("{name} does not resolve to the same entry").into());
        }
    }

    Ok(())
}

#[macro_export]
macro_rules! round_trip {
    (should_panic, $name:ident, $($input:literal),+ $(,)?) => {
        pub fn $name() -> Result<(), libtest_mimic::Failed> {
            for input in [$($input),+] {
                if katex_macros::format::from_json(input).is_ok() {
                    return Err(format!("expected an error for input: {}", input).into());
                }
            }
            Ok(())
        }

        inventory::submit! {
            $crate::common::TestCase {
                name: stringify!($name),
                test: $name
            }
        }
    };
    ($name:ident, $($input:literal),+ $(,)?) => {
        pub fn $name() -> Result<(), libtest_mimic::Failed> {
            for input in [$($input),+] {
                $crate::common::round_trip(input)?;
            }
            Ok(())
        }

        inventory::submit! {
            $crate::common::TestCase {
                name: stringify!($name),
                test: $name
            }
        }
    };
}
