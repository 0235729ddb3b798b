#[cfg(test)]
pub mod test {
    use crate::field::{Bindable, Field};

    // -- String fields across every source combination ------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct StringConfig {
        pub with_default: Option<String>,
        pub without_env_and_default: Option<String>,
        pub with_env_and_default: Option<String>,
        pub with_env: Option<String>,
        pub preset_with_env_and_default: Option<String>,
        pub preset_with_only_env: Option<String>,
        pub preset_with_only_default: Option<String>,
        pub plain: String,
        pub plain_with_default: String,
        pub plain_with_env_and_default: String,
        pub plain_preset: String,
        pub untagged: Option<String>,
        pub untagged_unsupported: f32,
    }

    impl Bindable for StringConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("with_default", &mut self.with_default)
                    .env("NO_ENV_VALUE")
                    .default_value("default_1"),
                Field::new("without_env_and_default", &mut self.without_env_and_default)
                    .env("NO_ENV_VALUE2"),
                Field::new("with_env_and_default", &mut self.with_env_and_default)
                    .env("TEST_ENV_VALUE_1")
                    .default_value("default_2"),
                Field::new("with_env", &mut self.with_env).env("TEST_ENV_VALUE_2"),
                Field::new(
                    "preset_with_env_and_default",
                    &mut self.preset_with_env_and_default,
                )
                .env("TEST_ENV_VALUE_3")
                .default_value("default_2"),
                Field::new("preset_with_only_env", &mut self.preset_with_only_env)
                    .env("TEST_ENV_VALUE_4"),
                Field::new("preset_with_only_default", &mut self.preset_with_only_default)
                    .env("NO_ENV_VALUE3")
                    .default_value("default_3"),
                Field::new("plain", &mut self.plain),
                Field::new("plain_with_default", &mut self.plain_with_default)
                    .default_value("default_4"),
                Field::new(
                    "plain_with_env_and_default",
                    &mut self.plain_with_env_and_default,
                )
                .env("TEST_ENV_VALUE_5")
                .default_value("default_5"),
                Field::new("plain_preset", &mut self.plain_preset),
                Field::new("untagged", &mut self.untagged),
                Field::new("untagged_unsupported", &mut self.untagged_unsupported),
            ]
        }
    }

    pub fn string_env() -> Vec<(String, String)> {
        (1..=5)
            .map(|i| (format!("TEST_ENV_VALUE_{i}"), format!("env_value_{i}")))
            .collect()
    }

    // -- Unsigned integer fields ---------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct UintConfig {
        pub with_default: Option<u64>,
        pub string_without_env_and_default: Option<String>,
        pub with_env_and_default: Option<u64>,
        pub with_env: Option<u64>,
        pub preset_with_env_and_default: Option<u64>,
        pub preset_with_only_env: Option<u64>,
        pub plain_with_default: u64,
    }

    impl Bindable for UintConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("with_default", &mut self.with_default)
                    .env("NO_ENV_VALUE")
                    .default_value("10"),
                Field::new(
                    "string_without_env_and_default",
                    &mut self.string_without_env_and_default,
                )
                .env("NO_ENV_VALUE2"),
                Field::new("with_env_and_default", &mut self.with_env_and_default)
                    .env("TEST_ENV_VALUE_1")
                    .default_value("20"),
                Field::new("with_env", &mut self.with_env).env("TEST_ENV_VALUE_2"),
                Field::new(
                    "preset_with_env_and_default",
                    &mut self.preset_with_env_and_default,
                )
                .env("TEST_ENV_VALUE_3")
                .default_value("30"),
                Field::new("preset_with_only_env", &mut self.preset_with_only_env)
                    .env("TEST_ENV_VALUE_4"),
                Field::new("plain_with_default", &mut self.plain_with_default)
                    .default_value("40"),
            ]
        }
    }

    // -- Argument-bound fields -----------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct FlagConfig {
        pub field_1: Option<String>,
        pub field_2: Option<String>,
        pub field_3: u32,
        pub field_4: usize,
    }

    impl Bindable for FlagConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("field_1", &mut self.field_1).arg("arg_1"),
                Field::new("field_2", &mut self.field_2)
                    .arg("arg_2")
                    .default_value("arg_2_default"),
                Field::new("field_3", &mut self.field_3)
                    .arg("arg_3")
                    .default_value("3"),
                Field::new("field_4", &mut self.field_4).arg("arg_4"),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct DescribedConfig {
        pub description_only: Option<u64>,
        pub description_and_env: Option<u64>,
        pub env_only: Option<u64>,
        pub neither: Option<u64>,
    }

    impl Bindable for DescribedConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("description_only", &mut self.description_only)
                    .arg("argName_1")
                    .description("Usage of argName_1."),
                Field::new("description_and_env", &mut self.description_and_env)
                    .env("envName_2")
                    .arg("argName_2")
                    .description("Usage of argName_2."),
                Field::new("env_only", &mut self.env_only)
                    .env("envName_3")
                    .arg("argName_3"),
                Field::new("neither", &mut self.neither).arg("argName_4"),
            ]
        }
    }

    // -- Precedence across all three sources ----------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct ServerConfig {
        pub host: String,
        pub port: Option<u16>,
    }

    impl Bindable for ServerConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("host", &mut self.host)
                    .arg("host")
                    .env("SERVER_HOST")
                    .default_value("localhost")
                    .description("Host to bind."),
                Field::new("port", &mut self.port)
                    .arg("port")
                    .env("SERVER_PORT")
                    .default_value("8080")
                    .description("Port to listen on."),
            ]
        }
    }

    // -- Unsupported types -----------------------------------------------------

    #[derive(Debug, Default)]
    pub struct UnsupportedConfig {
        pub ratio: f64,
    }

    impl Bindable for UnsupportedConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::new("ratio", &mut self.ratio).default_value("12345")]
        }
    }

    #[derive(Debug, Default)]
    pub struct UnsupportedOptionConfig {
        pub offset: Option<i64>,
    }

    impl Bindable for UnsupportedOptionConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::new("offset", &mut self.offset).arg("offset")]
        }
    }
}
