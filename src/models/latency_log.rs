use serde::de::DeserializeOwned;

// 공통 트레이트 정의 - 모든 레이턴시 로그 레코드가 구현해야 함
pub trait LatencyLog: DeserializeOwned {
    // 리포트에 표시되는 테이블 이름
    const TABLE_NAME: &'static str;

    // 분석 프로그램과 같은 디렉토리에 있는 기본 파일 이름
    const FILE_NAME: &'static str;

    // 헤더에 반드시 있어야 하는 나노초 컬럼 (스키마 순서)
    fn source_columns() -> &'static [&'static str];

    // (나노초 컬럼, 마이크로초 컬럼) 변환 쌍
    fn unit_conversions() -> &'static [(&'static str, &'static str)];

    // source_columns() 순서대로 값 반환
    fn source_values(&self) -> Vec<i64>;
}
