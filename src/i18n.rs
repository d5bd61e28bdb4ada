//! Validation and warning messages
//!
//! Only the text shown for validation problems is localized; numbers and
//! import warnings are not affected by the language setting.

use crate::domain::Language;

/// Message identifiers. Variants with fields are formatted with their values.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    NoPrinter,
    NoFilament,
    FilamentNotChosen { line: usize },
    GramsNotPositive { line: usize },
    TooManyFilaments { max: usize },
    PrintTimeZero,
    ElectricityPriceNotSet,
}

impl Message {
    pub fn text(&self, lang: Language) -> String {
        use Language::*;
        use Message::*;

        match (self, lang) {
            (NoPrinter, En) => "Select a printer.".into(),
            (NoPrinter, De) => "Bitte einen Drucker auswählen.".into(),
            (NoPrinter, Hu) => "Válassz nyomtatót.".into(),

            (NoFilament, En) => "Add at least one filament.".into(),
            (NoFilament, De) => "Mindestens ein Filament hinzufügen.".into(),
            (NoFilament, Hu) => "Adj hozzá legalább egy filamentet.".into(),

            (FilamentNotChosen { line }, En) => format!("Filament #{line}: choose a filament."),
            (FilamentNotChosen { line }, De) => format!("Filament #{line}: bitte ein Filament wählen."),
            (FilamentNotChosen { line }, Hu) => format!("{line}. filament: válassz filamentet."),

            (GramsNotPositive { line }, En) => {
                format!("Filament #{line}: used amount must be greater than 0 g.")
            }
            (GramsNotPositive { line }, De) => {
                format!("Filament #{line}: die Menge muss größer als 0 g sein.")
            }
            (GramsNotPositive { line }, Hu) => {
                format!("{line}. filament: a felhasznált mennyiségnek 0 g-nál nagyobbnak kell lennie.")
            }

            (TooManyFilaments { max }, En) => {
                format!("This printer can use at most {max} filament(s) at once.")
            }
            (TooManyFilaments { max }, De) => {
                format!("Dieser Drucker kann höchstens {max} Filament(e) gleichzeitig verwenden.")
            }
            (TooManyFilaments { max }, Hu) => {
                format!("Ez a nyomtató egyszerre legfeljebb {max} filamentet használhat.")
            }

            (PrintTimeZero, En) => "Print time must be greater than zero.".into(),
            (PrintTimeZero, De) => "Die Druckzeit muss größer als null sein.".into(),
            (PrintTimeZero, Hu) => "A nyomtatási időnek nullánál nagyobbnak kell lennie.".into(),

            (ElectricityPriceNotSet, En) => {
                "Electricity price is not set, electricity and drying costs will be zero.".into()
            }
            (ElectricityPriceNotSet, De) => {
                "Kein Strompreis gesetzt, Strom- und Trocknungskosten sind null.".into()
            }
            (ElectricityPriceNotSet, Hu) => {
                "Nincs megadva áramár, az áram- és szárítási költség nulla lesz.".into()
            }
        }
    }
}
