//! JSON encoding and decoding of trees.
//!
//! A node encodes as an object mapping the configured value key to the
//! serde_json encoding of its payload (`null` when absent); a non-leaf
//! additionally maps the configured children key to the array of child
//! objects. Leaves omit the children key entirely, and the value key always
//! comes first. [`Node::from_json`] decodes the same shape back, so a tree
//! round-trips through its own output.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    error::{TreeError, TreeResult},
    format::JsonFormat,
    node::Node,
    tree::Tree,
};

impl<Data> Node<Data>
where
    Data: Serialize,
{
    /// Encode this subtree as a JSON object using the default
    /// [`JsonFormat`] keys.
    pub fn to_json(&self) -> TreeResult<String> {
        self.to_json_with(&JsonFormat::DEFAULT)
    }

    pub fn to_json_with(&self, format: &JsonFormat) -> TreeResult<String> {
        let mut out = String::new();
        self.write_json(&mut out, format)?;
        Ok(out)
    }

    fn write_json(&self, out: &mut String, format: &JsonFormat) -> TreeResult<()> {
        out.push('{');
        out.push_str(&serde_json::to_string(format.value_key)?);
        out.push(':');
        match self.value() {
            Some(value) => out.push_str(&serde_json::to_string(value)?),
            None => out.push_str("null"),
        }

        if !self.is_leaf() {
            out.push(',');
            out.push_str(&serde_json::to_string(format.children_key)?);
            out.push_str(":[");
            for (index, child) in self.children().iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                child.write_json(out, format)?;
            }
            out.push(']');
        }

        out.push('}');
        Ok(())
    }
}

impl<Data> Node<Data>
where
    Data: DeserializeOwned,
{
    /// Decode a node from the object shape produced by [`Node::to_json`].
    ///
    /// A missing or `null` value key yields an absent payload; a missing
    /// children key yields a leaf; unknown keys are ignored. Any other
    /// shape is [`TreeError::InvalidNode`]. The document's child order is
    /// reproduced verbatim.
    pub fn from_json(text: &str) -> TreeResult<Self> {
        Self::from_json_with(text, &JsonFormat::DEFAULT)
    }

    pub fn from_json_with(text: &str, format: &JsonFormat) -> TreeResult<Self> {
        let document: Value = serde_json::from_str(text)?;
        Self::decode(&document, format)
    }

    fn decode(document: &Value, format: &JsonFormat) -> TreeResult<Self> {
        let object = document.as_object().ok_or_else(|| TreeError::InvalidNode {
            expected: "a node object",
            found: json_kind(document),
        })?;

        let mut node = match object.get(format.value_key) {
            None | Some(Value::Null) => Node::default(),
            Some(value) => Node::new(serde_json::from_value(value.clone())?),
        };

        if let Some(children) = object.get(format.children_key) {
            let entries = children.as_array().ok_or_else(|| TreeError::InvalidNode {
                expected: "a children array",
                found: json_kind(children),
            })?;
            for entry in entries {
                node.push_node(Self::decode(entry, format)?);
            }
        }

        Ok(node)
    }
}

impl<Data> Tree<Data>
where
    Data: DeserializeOwned,
{
    /// Decode a whole tree from the object shape produced by
    /// [`Node::to_json`].
    pub fn from_json(text: &str) -> TreeResult<Self> {
        Node::from_json(text).map(Tree::from_node)
    }

    pub fn from_json_with(text: &str, format: &JsonFormat) -> TreeResult<Self> {
        Node::from_json_with(text, format).map(Tree::from_node)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test::{letters, single};
    use crate::{JsonFormat, Node, Tree, TreeError};

    #[test]
    fn leaf_objects_omit_the_children_key() {
        assert_eq!(single("X").to_json().unwrap(), r#"{"value":"X"}"#);
        assert_eq!(Node::new(42).to_json().unwrap(), r#"{"value":42}"#);
    }

    #[test]
    fn json_of_reference_tree() {
        let tree = letters();

        assert_eq!(
            tree.to_json().unwrap(),
            r#"{"value":"A","children":[{"value":"B","children":[{"value":"D"}]},{"value":"C"}]}"#
        );
    }

    #[test]
    fn absent_values_encode_as_null() {
        let mut tree = letters();
        tree.remove(&"A");

        assert!(tree.to_json().unwrap().starts_with(r#"{"value":null,"#));
        assert_eq!(Tree::<&str>::new().to_json().unwrap(), r#"{"value":null}"#);
    }

    #[test]
    fn honors_custom_keys() {
        let format = JsonFormat {
            value_key: "v",
            children_key: "kids",
        };

        let mut node = Node::new("a".to_string());
        node.add_value("b".to_string());

        let text = node.to_json_with(&format).unwrap();
        assert_eq!(text, r#"{"v":"a","kids":[{"v":"b"}]}"#);

        let decoded = Node::<String>::from_json_with(&text, &format).unwrap();
        assert_eq!(decoded.preorder(), node.preorder());
    }

    #[test]
    fn round_trips_the_reference_tree() {
        let mut tree = Tree::with_root("A".to_string());
        tree.add("B".to_string());
        tree.add("C".to_string());
        tree.find_mut(&"B".to_string())
            .unwrap()
            .add_value("D".to_string());

        let text = tree.to_json().unwrap();
        let decoded = Tree::<String>::from_json(&text).unwrap();

        assert_eq!(decoded.preorder(), tree.preorder());
        assert_eq!(decoded, tree);
    }

    #[test]
    fn round_trips_absent_values() {
        let mut tree = Tree::with_root("A".to_string());
        tree.add("B".to_string());
        tree.remove(&"A".to_string());

        let decoded = Tree::<String>::from_json(&tree.to_json().unwrap()).unwrap();
        assert_eq!(decoded.root_value(), None);
        assert_eq!(decoded, tree);
    }

    #[test]
    fn decoding_missing_keys_yields_an_empty_leaf() {
        let node = Node::<String>::from_json("{}").unwrap();

        assert_eq!(node.value(), None);
        assert!(node.is_leaf());
    }

    #[test]
    fn rejects_documents_that_are_not_objects() {
        let err = Node::<String>::from_json("[1,2]").unwrap_err();
        assert!(matches!(
            err,
            TreeError::InvalidNode {
                expected: "a node object",
                found: "an array"
            }
        ));
    }

    #[test]
    fn rejects_malformed_children() {
        let err = Node::<String>::from_json(r#"{"value":"a","children":3}"#).unwrap_err();
        assert!(matches!(
            err,
            TreeError::InvalidNode {
                expected: "a children array",
                found: "a number"
            }
        ));
    }

    #[test]
    fn rejects_unparsable_documents() {
        let err = Node::<String>::from_json("{not json").unwrap_err();
        assert!(matches!(err, TreeError::Json(_)));
    }

    #[test]
    fn rejects_mistyped_values() {
        let err = Node::<String>::from_json(r#"{"value":3}"#).unwrap_err();
        assert!(matches!(err, TreeError::Json(_)));
    }
}
