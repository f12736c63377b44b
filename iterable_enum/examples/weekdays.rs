use iterable_enum::{EnumValue, IterableEnum, IterableEnumType};

#[derive(IterableEnum, Clone, Copy, Debug, PartialEq)]
enum Weekday {
    #[iterable(alias = "Sunday")]
    Sun,
    #[iterable(alias = "Monday")]
    Mon,
    #[iterable(alias = "Tuesday")]
    Tue,
}

fn main() -> iterable_enum::Result<()> {
    // Runtime construction, Monday first
    let week = IterableEnum::builder()
        .mapping([("SUN", 0), ("MON", 1), ("TUE", 2)])
        .aliases([("SUN", "Sunday"), ("MON", "Monday"), ("TUE", "Tuesday")])
        .order([1])
        .strict(true)
        .build()?;

    println!("Select options:");
    for option in week.select_options(None) {
        println!("  {:>8} => {}", option.label.unwrap_or_default(), option.value);
    }

    let stored = EnumValue::from(2);
    println!("\nStored value {} renders as {:?}", stored, week.alias(&stored));

    // The same table derived from a native enum
    println!("\nDerived:");
    for &day in Weekday::VARIANTS {
        println!("  {:?} = {} ({:?})", day, day.value(), day.entry_alias());
    }
    println!("Weekday table has {} items", Weekday::iterable().len());

    Ok(())
}
