// https://dictionaryapi.dev/ - free, no key, one GET per word
// entries live under /api/v2/entries/<language>/<word>, a miss answers 404 with a json explanation

use reqwest::{StatusCode, Url};

use crate::{dictionary::NotFoundError, DictionaryConfig, DictionaryError, Word};

pub(crate) fn entry_url(config: &DictionaryConfig, word: &str) -> Result<Url, DictionaryError> {
    let mut url = Url::parse(&config.base_url)
        .map_err(|error| DictionaryError::InvalidUrl(format!("{}: {error}", config.base_url)))?;
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidUrl(config.base_url.clone()))?
        .pop_if_empty()
        .push(&config.language)
        .push(word);
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    word: &str,
) -> Result<Vec<Word>, DictionaryError> {
    let url = entry_url(config, word)?;
    tracing::debug!(%url, "requesting definition");
    let res = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        // the body only explains the miss, a broken one is not worth failing over
        let body = res.json::<NotFoundError>().await.unwrap_or_default();
        return Err(DictionaryError::NotFound(body));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    res.json::<Vec<Word>>()
        .await
        .map_err(DictionaryError::Deserialize)
}
