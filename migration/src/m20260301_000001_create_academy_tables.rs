use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().null())
                    .col(ColumnDef::new(Courses::Code).string().null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Instructor).string().null())
                    .col(ColumnDef::new(Courses::Credits).integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::Title).string().null())
                    .col(ColumnDef::new(Exams::CourseName).string().null())
                    .col(ColumnDef::new(Exams::ExamDate).string().null())
                    .col(ColumnDef::new(Exams::ExamTime).string().null())
                    .col(ColumnDef::new(Exams::Location).string().null())
                    .col(ColumnDef::new(Exams::DurationMinutes).integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建成绩表（学生、课程、考试均以名称引用，不建外键）
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Results::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Results::StudentName).string().null())
                    .col(ColumnDef::new(Results::CourseName).string().null())
                    .col(ColumnDef::new(Results::ExamTitle).string().null())
                    .col(ColumnDef::new(Results::Score).double().null())
                    .col(ColumnDef::new(Results::Grade).string().null())
                    .to_owned(),
            )
            .await?;

        // 创建复查申请表
        manager
            .create_table(
                Table::create()
                    .table(ReevaluationRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReevaluationRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReevaluationRequests::StudentName)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ReevaluationRequests::CourseName)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(ReevaluationRequests::Reason).text().null())
                    .col(ColumnDef::new(ReevaluationRequests::Status).string().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ReevaluationRequests::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Results::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Code,
    Description,
    Instructor,
    Credits,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    Title,
    CourseName,
    ExamDate,
    ExamTime,
    Location,
    DurationMinutes,
}

#[derive(DeriveIden)]
enum Results {
    #[sea_orm(iden = "results")]
    Table,
    Id,
    StudentName,
    CourseName,
    ExamTitle,
    Score,
    Grade,
}

#[derive(DeriveIden)]
enum ReevaluationRequests {
    #[sea_orm(iden = "reevaluation_requests")]
    Table,
    Id,
    StudentName,
    CourseName,
    Reason,
    Status,
}
