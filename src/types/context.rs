use std::collections::HashMap;

///
/// The country a survey runs over, identified by its ISO 3166-1 alpha-2 code
///
#[derive(Debug, PartialEq, Clone)]
pub struct Context {
    pub country: String
}

impl Context {
    pub fn new(country: impl ToString) -> Self {
        Context {
            country: country.to_string().trim().to_uppercase()
        }
    }

    ///
    /// English display name of the country, as understood by the geocoder
    ///
    pub fn country_name(&self) -> Option<String> {
        lazy_static! {
            static ref COUNTRIES: HashMap<&'static str, &'static str> = {
                let mut m = HashMap::new();

                m.insert("RU", "Russia");
                m.insert("BY", "Belarus");
                m.insert("UA", "Ukraine");
                m.insert("KZ", "Kazakhstan");

                m
            };
        }

        COUNTRIES.get(self.country.as_str()).map(|name| name.to_string())
    }

    ///
    /// Built in list of first level administrative regions
    ///
    /// Countries without a built in list return an empty Vec; regions must
    /// then be passed explicitly
    ///
    pub fn regions(&self) -> Vec<String> {
        match self.country.as_str() {
            "RU" => RU_REGIONS.iter().map(|region| region.to_string()).collect(),
            _ => Vec::new()
        }
    }

    ///
    /// Free text geocoder query for a region of this country
    ///
    /// ie: Tula Oblast => Tula Oblast, Russia
    ///
    pub fn query(&self, region: &str) -> String {
        match self.country_name() {
            Some(country) => format!("{}, {}", region, country),
            None => region.to_string()
        }
    }
}

/// Federal subjects of Russia
const RU_REGIONS: [&str; 85] = [
    "Republic of Adygea",
    "Republic of Bashkortostan",
    "Republic of Buryatia",
    "Republic of Altai",
    "Republic of Dagestan",
    "Republic of Ingushetia",
    "Kabardino-Balkarian Republic",
    "Republic of Kalmykia",
    "Karachay-Cherkess Republic",
    "Republic of Karelia",
    "Komi Republic",
    "Republic of Crimea",
    "Republic of Mari El",
    "Republic of Mordovia",
    "Republic of Sakha",
    "Republic of North Ossetia-Alania",
    "Republic of Tatarstan",
    "Republic of Tuva",
    "Udmurt Republic",
    "Republic of Khakassia",
    "Chechen Republic",
    "Chuvash Republic",

    "Altai Krai",
    "Zabaykalsky Krai",
    "Kamchatka Krai",
    "Krasnodar Krai",
    "Krasnoyarsk Krai",
    "Perm Krai",
    "Primorsky Krai",
    "Stavropol Krai",
    "Khabarovsk Krai",

    "Amur Oblast",
    "Arkhangelsk Oblast",
    "Astrakhan Oblast",
    "Belgorod Oblast",
    "Bryansk Oblast",
    "Vladimir Oblast",
    "Volgograd Oblast",
    "Vologda Oblast",
    "Voronezh Oblast",
    "Ivanovo Oblast",
    "Irkutsk Oblast",
    "Kaliningrad Oblast",
    "Kaluga Oblast",
    "Kemerovo Oblast",
    "Kirov Oblast",
    "Kostroma Oblast",
    "Kurgan Oblast",
    "Kursk Oblast",
    "Leningrad Oblast",
    "Lipetsk Oblast",
    "Magadan Oblast",
    "Moscow Oblast",
    "Murmansk Oblast",
    "Nizhny Novgorod Oblast",
    "Novgorod Oblast",
    "Novosibirsk Oblast",
    "Omsk Oblast",
    "Orenburg Oblast",
    "Oryol Oblast",
    "Penza Oblast",
    "Pskov Oblast",
    "Rostov Oblast",
    "Ryazan Oblast",
    "Samara Oblast",
    "Saratov Oblast",
    "Sakhalin Oblast",
    "Sverdlovsk Oblast",
    "Smolensk Oblast",
    "Tambov Oblast",
    "Tver Oblast",
    "Tomsk Oblast",
    "Tula Oblast",
    "Tyumen Oblast",
    "Ulyanovsk Oblast",
    "Chelyabinsk Oblast",
    "Yaroslavl Oblast",

    "Moscow",
    "Saint Petersburg",
    "Sevastopol",

    "Jewish Autonomous Oblast",
    "Nenets Autonomous Okrug",
    "Khanty-Mansi Autonomous Okrug",
    "Chukotka Autonomous Okrug",
    "Yamalo-Nenets Autonomous Okrug"
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_test() {
        assert_eq!(Context::new("ru"), Context {
            country: String::from("RU")
        });

        let cntx = Context::new(" Ru ");
        assert_eq!(cntx.country_name(), Some(String::from("Russia")));
        assert_eq!(cntx.query("Tula Oblast"), String::from("Tula Oblast, Russia"));

        let regions = cntx.regions();
        assert_eq!(regions.len(), 85);
        assert_eq!(regions[0], String::from("Republic of Adygea"));
        assert!(regions.contains(&String::from("Sevastopol")));
    }

    #[test]
    fn unknown_country_test() {
        let cntx = Context::new("zz");

        assert_eq!(cntx.country_name(), None);
        assert_eq!(cntx.regions(), Vec::<String>::new());
        assert_eq!(cntx.query("Somewhere"), String::from("Somewhere"));
    }
}
