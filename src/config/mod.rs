/*!
Configuration of a [context](crate::context).

All configuration for a context is contained within a [Config].
The configuration only concerns the reference context, as the consequence and mutex procedures are parameter free.
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation used for the values of integer symbols.
pub type IntRepresentation = i64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of valuations examined during a check before the check is given up as unknown.
    pub enumeration_limit: ConfigOption<usize>,

    /// The least value an integer symbol may take.
    pub int_lower: ConfigOption<IntRepresentation>,

    /// The greatest value an integer symbol may take.
    pub int_upper: ConfigOption<IntRepresentation>,

    /// Shrink the core of an unsatisfiable check by removing assumptions one at a time.
    pub minimize_cores: ConfigOption<bool>,
}

impl Default for Config {
    /// The default context is configured to provide quick results on small formulas, with integers in a small band around zero.
    fn default() -> Self {
        Config {
            enumeration_limit: ConfigOption {
                name: "enumeration_limit",
                min: 1,
                max: usize::MAX,
                value: 1 << 20,
            },

            int_lower: ConfigOption {
                name: "int_lower",
                min: IntRepresentation::MIN,
                max: IntRepresentation::MAX,
                value: -8,
            },

            int_upper: ConfigOption {
                name: "int_upper",
                min: IntRepresentation::MIN,
                max: IntRepresentation::MAX,
                value: 8,
            },

            minimize_cores: ConfigOption {
                name: "minimize_cores",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
