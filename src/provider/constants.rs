pub(crate) const COMPLETION_URL: &str =
    "https://llm.api.cloud.yandex.net/foundationModels/v1/completion";

pub(crate) const API_KEY_ENV_VAR: &str = "YANDEX_API_KEY";
pub(crate) const FOLDER_ID_ENV_VAR: &str = "YANDEX_FOLDER_ID";
pub(crate) const MODEL_URI_ENV_VAR: &str = "YANDEX_MODEL_URI";

pub(crate) const DEFAULT_MODEL: &str = "yandexgpt/latest";
