use crate::error::{AnalysisError, AnalysisResult};

/// 컬럼 하나의 값 (행 순서 유지)
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Integer(Vec<i64>),
    Float(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(values) => values.len(),
            ColumnData::Float(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 통계 계산용으로 f64 벡터 반환
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            ColumnData::Integer(values) => values.iter().map(|&v| v as f64).collect(),
            ColumnData::Float(values) => values.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// 이름 있는 컬럼들로 구성된 메모리 테이블
///
/// 모든 컬럼의 길이는 같고, 컬럼은 추가된 순서대로 유지된다.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyTable {
    name: String,
    row_count: usize,
    columns: Vec<Column>,
}

impl LatencyTable {
    pub fn new(name: &str, row_count: usize) -> Self {
        Self {
            name: name.to_string(),
            row_count,
            columns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// 컬럼 추가. 같은 이름이 있으면 교체한다.
    pub fn insert_column(&mut self, name: &str, data: ColumnData) -> AnalysisResult<()> {
        if data.len() != self.row_count {
            return Err(AnalysisError::InvalidConfig(format!(
                "column '{}' has {} rows but table {} has {}",
                name,
                data.len(),
                self.name,
                self.row_count
            )));
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.data = data,
            None => self.columns.push(Column {
                name: name.to_string(),
                data,
            }),
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> AnalysisResult<&ColumnData> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.data)
            .ok_or_else(|| AnalysisError::UnknownColumn {
                table: self.name.clone(),
                column: name.to_string(),
            })
    }

    pub fn f64_values(&self, name: &str) -> AnalysisResult<Vec<f64>> {
        Ok(self.column(name)?.to_f64_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup() {
        let mut table = LatencyTable::new("packet latency", 3);
        table
            .insert_column("queue_duration_ns", ColumnData::Integer(vec![1, 2, 3]))
            .unwrap();

        assert_eq!(table.f64_values("queue_duration_ns").unwrap(), vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            table.column("missing"),
            Err(AnalysisError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_insert_column_rejects_wrong_length() {
        let mut table = LatencyTable::new("tcp response", 2);
        let result = table.insert_column("x", ColumnData::Float(vec![1.0]));
        assert!(result.is_err());
        assert!(table.column_names().is_empty());
    }

    #[test]
    fn test_insert_column_keeps_order() {
        let mut table = LatencyTable::new("t", 1);
        table.insert_column("b", ColumnData::Integer(vec![1])).unwrap();
        table.insert_column("a", ColumnData::Float(vec![2.0])).unwrap();
        table.insert_column("b", ColumnData::Integer(vec![5])).unwrap();
        assert_eq!(table.column_names(), vec!["b", "a"]);
        assert_eq!(table.column("b").unwrap(), &ColumnData::Integer(vec![5]));
    }
}
