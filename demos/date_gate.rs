use album_shelf::{is_valid_date_format, validate_date};

fn main() {
    let candidates = [
        "25/12/2023",
        "  29/02/2020  ",
        "29/02/2021",
        "31/04/2023",
        "15-12-2023",
        "05/11/2022",
        "",
    ];

    for candidate in candidates {
        match validate_date(candidate) {
            Some(date) => println!("{candidate:>16} -> {date}"),
            None => println!("{candidate:>16} -> rejected"),
        }
    }

    // absent input is just another rejection
    println!("absent input accepted: {}", is_valid_date_format(None));
}
