// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ordered name/value collections used for request headers and query parameters

use crate::s3::utils::urlencode;
use std::fmt;

/// Ordered list of header name/value pairs.
///
/// Names keep the caller's spelling and insertion order, which is the order
/// in which headers go on the wire. Lookups ignore ASCII case.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

/// Query parameters share the ordered layout of [`Headers`].
pub type QueryParams = Headers;

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair, keeping any existing values for the same name
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.push((key.into(), value.into()));
    }

    /// Appends a pair only if `value` is present
    pub fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            self.add(key, v);
        }
    }

    /// Appends all pairs of `other`
    pub fn add_all(&mut self, other: Headers) {
        self.entries.extend(other.entries);
    }

    /// Replaces every value stored under `key` with a single `value`.
    ///
    /// The new pair takes the position of the first replaced pair, or goes
    /// last if the name was not present.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(pos) => {
                self.entries[pos] = (key.clone(), value);
                let mut i = pos + 1;
                while i < self.entries.len() {
                    if self.entries[i].0.eq_ignore_ascii_case(&key) {
                        self.entries.remove(i);
                    } else {
                        i += 1;
                    }
                }
            }
            None => self.entries.push((key, value)),
        }
    }

    /// Removes every pair stored under `key` and returns the removed values
    pub fn remove(&mut self, key: &str) -> Vec<String> {
        let mut removed = Vec::new();
        self.entries.retain(|(k, v)| {
            if k.eq_ignore_ascii_case(key) {
                removed.push(v.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the pairs to an HTTP query string, in insertion order
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in &self.entries {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&urlencode(key));
            query.push('=');
            query.push_str(&urlencode(value));
        }
        query
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut h = Headers::new();
        h.add("Date", "d");
        h.add("Content-Type", "text/plain");
        h.add("x-amz-acl", "public-read");
        let names: Vec<&str> = h.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Date", "Content-Type", "x-amz-acl"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let h: Headers = [("Content-MD5", "abc")].into_iter().collect();
        assert_eq!(h.get("content-md5"), Some("abc"));
        assert!(h.contains_key("CONTENT-MD5"));
        assert!(h.get("content-type").is_none());
    }

    #[test]
    fn test_set_replaces_all_values() {
        let mut h = Headers::new();
        h.add("a", "1");
        h.add("B", "2");
        h.add("b", "3");
        h.add("c", "4");
        h.set("b", "5");
        let pairs: Vec<(&str, &str)> = h.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "5"), ("c", "4")]);
    }

    #[test]
    fn test_remove() {
        let mut h = Headers::new();
        h.add("x-amz-meta-a", "1");
        h.add("X-Amz-Meta-A", "2");
        h.add("Date", "d");
        assert_eq!(h.remove("x-amz-meta-a"), vec!["1", "2"]);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_to_query_string() {
        let mut q = QueryParams::new();
        q.add("prefix", "photos/2006 a");
        q.add("max-keys", "10");
        assert_eq!(q.to_query_string(), "prefix=photos%2F2006%20a&max-keys=10");
        assert_eq!(QueryParams::new().to_query_string(), "");
    }
}
