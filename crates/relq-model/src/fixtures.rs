//! Built-in sample dataset: a small slice of a trading company's books.

use crate::dataset::Dataset;
use crate::entity::{Customer, Order, Product, Supplier};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

// Dates are literals below; `test_sample_is_valid_and_complete` is the guard
// against a typo falling back to the epoch.
fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Total from integer cents.
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn order(id: u32, total_cents: i64, (y, m, d): (i32, u32, u32)) -> Order {
    Order::new(id, cents(total_cents), at(y, m, d))
}

fn customers() -> Vec<Customer> {
    vec![
        Customer::new("ALFKI", "Alfreds Futterkiste", "Germany", "Berlin")
            .with_address("Obere Str. 57")
            .with_postal_code("12209")
            .with_phone("030-0074321")
            .with_order(order(10643, 81450, (1997, 8, 25)))
            .with_order(order(10692, 87800, (1997, 10, 3)))
            .with_order(order(10702, 33000, (1997, 10, 13))),
        Customer::new(
            "ANATR",
            "Ana Trujillo Emparedados y helados",
            "Mexico",
            "México D.F.",
        )
        .with_address("Avda. de la Constitución 2222")
        .with_postal_code("05021")
        .with_phone("(5) 555-4729")
        .with_order(order(10308, 8880, (1996, 9, 18)))
        .with_order(order(10625, 47975, (1997, 8, 8))),
        Customer::new("AROUT", "Around the Horn", "UK", "London")
            .with_address("120 Hanover Sq.")
            .with_postal_code("WA1 1DP")
            .with_phone("(171) 555-7788")
            .with_order(order(10355, 48000, (1996, 11, 15)))
            .with_order(order(10383, 89900, (1996, 12, 16)))
            .with_order(order(10453, 40770, (1997, 2, 21))),
        Customer::new("BSBEV", "B's Beverages", "UK", "London")
            .with_address("Fauntleroy Circus")
            .with_postal_code("EC2 5NT")
            .with_phone("(171) 555-1212")
            .with_order(order(10289, 47940, (1996, 8, 26))),
        Customer::new("BONAP", "Bon app'", "France", "Marseille")
            .with_address("12, rue des Bouchers")
            .with_postal_code("13008")
            .with_phone("91.24.45.40")
            .with_order(order(10331, 8850, (1996, 10, 16)))
            .with_order(order(10340, 243618, (1996, 10, 29))),
        Customer::new(
            "FISSA",
            "FISSA Fabrica Inter. Salchichas S.A.",
            "Spain",
            "Madrid",
        )
        .with_address("C/ Moralzarzal, 86")
        .with_postal_code("28034")
        .with_phone("(91) 555 94 44"),
        Customer::new("GREAL", "Great Lakes Food Market", "USA", "Eugene")
            .with_address("2732 Baker Blvd.")
            .with_region("OR")
            .with_postal_code("97403")
            .with_phone("(503) 555-7555")
            .with_order(order(10528, 39220, (1997, 5, 6)))
            .with_order(order(10589, 7200, (1997, 7, 4))),
        Customer::new("HUNGC", "Hungry Coyote Import Store", "USA", "Elgin")
            .with_address("City Center Plaza 516 Main St.")
            .with_region("OR")
            .with_postal_code("OR 97827")
            .with_phone("(503) 555-6874")
            .with_order(order(10375, 33800, (1996, 12, 6)))
            .with_order(order(10394, 44200, (1996, 12, 25))),
        Customer::new("LAZYK", "Lazy K Kountry Store", "USA", "Walla Walla")
            .with_address("12 Orchestra Terrace")
            .with_region("WA")
            .with_postal_code("99362")
            .with_phone("509-555-7969")
            .with_order(order(10482, 14700, (1997, 3, 21)))
            .with_order(order(10545, 21000, (1997, 5, 22))),
        Customer::new("SPLIR", "Split Rail Beer & Ale", "USA", "Lander")
            .with_address("P.O. Box 555")
            .with_region("WY")
            .with_postal_code("82520-1234")
            .with_phone("(307) 555-4680")
            .with_order(order(10271, 4800, (1996, 8, 1)))
            .with_order(order(10329, 457843, (1996, 10, 15))),
    ]
}

fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new("1", "Exotic Liquids", "UK", "London").with_address("49 Gilbert St."),
        Supplier::new("2", "New Orleans Cajun Delights", "USA", "New Orleans")
            .with_address("P.O. Box 78934"),
        Supplier::new("3", "Grandma Kelly's Homestead", "USA", "Ann Arbor")
            .with_address("707 Oxford Rd."),
        Supplier::new("4", "Tokyo Traders", "Japan", "Tokyo").with_address("9-8 Sekimai"),
        Supplier::new("8", "Specialty Biscuits, Ltd.", "UK", "Manchester")
            .with_address("29 King's Way"),
        Supplier::new("11", "Heli Süßwaren GmbH & Co. KG", "Germany", "Berlin")
            .with_address("Tiergartenstraße 5"),
        Supplier::new("16", "Bigfoot Breweries", "USA", "Bend").with_address("3400 - 8th Avenue"),
        Supplier::new("18", "Aux joyeux ecclésiastiques", "France", "Paris")
            .with_address("203, Rue des Francs-Bourgeois"),
        Supplier::new("27", "Escargots Nouveaux", "France", "Montceau")
            .with_address("22, rue H. Voiron"),
        Supplier::new("30", "Thames Valley Provisions", "UK", "London")
            .with_address("7 Riverside Walk"),
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Chai", "Beverages", cents(1800), 39),
        Product::new(2, "Chang", "Beverages", cents(1900), 17),
        Product::new(3, "Aniseed Syrup", "Condiments", cents(1000), 13),
        Product::new(4, "Chef Anton's Cajun Seasoning", "Condiments", cents(2200), 53),
        Product::new(5, "Chef Anton's Gumbo Mix", "Condiments", cents(2135), 0),
        Product::new(9, "Mishi Kobe Niku", "Meat/Poultry", cents(9700), 29),
        Product::new(17, "Alice Mutton", "Meat/Poultry", cents(3900), 0),
        Product::new(24, "Guaraná Fantástica", "Beverages", cents(450), 20),
        Product::new(29, "Thüringer Rostbratwurst", "Meat/Poultry", cents(12379), 0),
        Product::new(38, "Côte de Blaye", "Beverages", cents(26350), 17),
        Product::new(43, "Ipoh Coffee", "Beverages", cents(4600), 17),
        Product::new(53, "Perth Pasties", "Meat/Poultry", cents(3280), 0),
    ]
}

impl Dataset {
    /// The built-in sample dataset used by the demos and tests.
    ///
    /// Ten customers (one without orders), ten suppliers and twelve products.
    /// The fixture data is constant and always validates.
    pub fn sample() -> Self {
        // Only `test_sample_is_valid_and_complete` guards this fallback: an
        // invalid fixture would otherwise surface as an empty dataset.
        Self::new(customers(), suppliers(), products()).unwrap_or_default()
    }
}
